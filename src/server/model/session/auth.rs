//! CSRF state for the Discord OAuth2 login flow.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "roster:auth:csrf";

/// CSRF state generated at login and consumed once by the callback.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Reads the stored state without consuming it.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored CSRF state
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No state in session
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Takes the stored state out of the session so it cannot be replayed.
    ///
    /// # Returns
    /// - `Ok(String)` - The state that was stored
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No state in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
