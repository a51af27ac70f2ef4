use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "roster:user:id";

/// ID of the signed in user.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - A user is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(Error::ParseError)` - The stored value is not a user ID
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| {
                id.parse::<i32>()
                    .map_err(|e| Error::ParseError(format!("Invalid session user ID: {}", e)))
            })
            .transpose()
    }
}
