use axum::{extract::State, http::StatusCode, response::IntoResponse};
use roster::server::{controller::auth::get_user, model::session::user::SessionUserId};
use roster_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};

#[tokio::test]
/// Expect 200 with the linked nation for a verified user
async fn returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_alliance(77, "The Knights Radiant", "the-knights-radiant")
        .with_verified_user(TEST_DISCORD_ID, 5001, 77, TEST_API_KEY)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["discordId"], TEST_DISCORD_ID);
    assert_eq!(body["apiKeyVerified"], true);
    assert_eq!(body["nation"]["nationId"], 5001);
    assert_eq!(body["nation"]["alliance"]["slug"], "the-knights-radiant");

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is signed in
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 and a cleared session when the session user no longer exists
async fn clears_session_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());

    Ok(())
}
