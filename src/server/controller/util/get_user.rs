use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Resolves the signed in user from the session.
///
/// A session pointing at a user that no longer exists is cleared so the next request
/// starts signed out.
///
/// # Returns
/// - `Ok(UserDto)` - Signed in user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No user in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - Session user no longer exists
/// - `Err(Error)` - Session or database failure
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            user_id = %user_id,
            "Cleared session for user missing from database"
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}
