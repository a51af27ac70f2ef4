use axum::{http::StatusCode, response::IntoResponse};
use roster::server::{controller::auth::logout, model::session::user::SessionUserId};
use roster_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect after logout with a user ID in session
async fn returns_redirect_on_logout_with_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/");

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect after logout even without session data
///
/// Clearing an empty session fails in the session store, so logout only clears sessions
/// holding a user ID.
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
