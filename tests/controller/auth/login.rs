use axum::{extract::State, http::StatusCode, response::IntoResponse};
use roster::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};
use roster_test_utils::prelude::*;

use crate::util::TestContextExt;

#[tokio::test]
/// Expect a 307 redirect to the Discord authorize URL with the CSRF state kept in session
async fn redirects_to_discord_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with(&format!("{}/oauth2/authorize", test.server_url())));

    let csrf = SessionAuthCsrf::get(&test.session).await.unwrap();
    assert!(location.contains(&format!("state={}", csrf)));

    Ok(())
}
