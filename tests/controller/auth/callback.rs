use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster::server::{
    controller::auth::{callback, CallbackParams},
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::TestContextExt;

fn params(state: &str) -> Query<CallbackParams> {
    Query(CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    })
}

#[tokio::test]
/// Expect a new user, a session and a redirect to the dashboard after a successful login
async fn signs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_discord_login(TEST_DISCORD_ID, "kaladin")
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        params("state"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/dashboard");

    let user = entity::prelude::User::find().one(&test.db).await?.unwrap();
    assert_eq!(user.discord_id, TEST_DISCORD_ID);
    assert_eq!(user.username, "kaladin");
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(user.id));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 without contacting Discord when the CSRF state does not match
async fn rejects_mismatched_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_endpoint(|server| server.mock("POST", "/oauth2/token").expect(0).create())
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        params("forged"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 when the Discord token exchange fails
async fn fails_when_token_exchange_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/oauth2/token")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"invalid_grant"}"#)
                .create()
        })
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        params("state"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
