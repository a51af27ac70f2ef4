use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Consumes the session's CSRF state and checks it against `csrf_state`.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state != csrf_state {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use roster_test_utils::prelude::*;

    use crate::server::{
        controller::util::csrf::validate_csrf, model::session::auth::SessionAuthCsrf,
    };

    /// Tests a matching CSRF state.
    ///
    /// Expected: Ok(())
    #[tokio::test]
    async fn validates_csrf_successfully() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        let result = validate_csrf(&test.session, "state").await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Tests a CSRF state that does not match the session.
    ///
    /// Expected: 400 Bad Request
    #[tokio::test]
    async fn fails_for_csrf_mismatch() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "different_state")
            .await
            .unwrap();

        let result = validate_csrf(&test.session, "state").await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Tests a callback arriving without a login in progress.
    ///
    /// Expected: 500 Internal Server Error
    #[tokio::test]
    async fn fails_when_csrf_not_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = validate_csrf(&test.session, "state").await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
