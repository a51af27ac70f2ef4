use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use roster::server::{controller::account::link_api_key, model::session::user::SessionUserId};
use roster_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::util::{json_body, TestContextExt};

fn body(value: serde_json::Value) -> Bytes {
    Bytes::from(value.to_string())
}

#[tokio::test]
/// Expect 200 with the nation and alliance page slug for a valid key
async fn links_valid_api_key() -> Result<(), TestError> {
    let nation = factory::mock_nation(5001, Some((77, "The Knights Radiant!!")));
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user(TEST_DISCORD_ID)
        .with_me_endpoint(TEST_API_KEY, 200, factory::me_response(nation), 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = link_api_key(
        State(test.into_app_state()),
        test.session.clone(),
        body(json!({ "apiKey": format!("  {}  ", TEST_API_KEY) })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["nationName"], "Nation 5001");
    assert_eq!(body["allianceName"], "The Knights Radiant!!");
    assert_eq!(body["allianceSlug"], "the-knights-radiant");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 and an unchanged user when the key does not resolve to a nation
async fn rejects_invalid_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user(TEST_DISCORD_ID)
        .with_me_endpoint(TEST_API_KEY, 200, factory::me_without_nation_response(), 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();
    let before = entity::prelude::User::find_by_id(1).one(&test.db).await?;

    let result = link_api_key(
        State(test.into_app_state()),
        test.session.clone(),
        body(json!({ "apiKey": TEST_API_KEY })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let after = entity::prelude::User::find_by_id(1).one(&test.db).await?;
    assert_eq!(before, after);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 when the API rejects the key with an authorization error
async fn rejects_unauthorized_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user(TEST_DISCORD_ID)
        .with_me_endpoint(
            TEST_API_KEY,
            200,
            factory::graphql_error_response("Unauthorized: invalid api_key"),
            1,
        )
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = link_api_key(
        State(test.into_app_state()),
        test.session.clone(),
        body(json!({ "apiKey": TEST_API_KEY })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 when Politics & War cannot be reached
async fn fails_when_api_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user(TEST_DISCORD_ID)
        .with_me_endpoint(TEST_API_KEY, 503, json!({}), 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = link_api_key(
        State(test.into_app_state()),
        test.session.clone(),
        body(json!({ "apiKey": TEST_API_KEY })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
/// Expect 400 without contacting Politics & War for a blank, missing or malformed key
async fn rejects_missing_api_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user(TEST_DISCORD_ID)
        .with_me_endpoint(TEST_API_KEY, 200, json!({}), 0)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    for request in [
        body(json!({ "apiKey": "   " })),
        body(json!({})),
        Bytes::from_static(b"not json"),
    ] {
        let result = link_api_key(State(test.into_app_state()), test.session.clone(), request).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "API key is required");
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is signed in
async fn rejects_unauthenticated_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_me_endpoint(TEST_API_KEY, 200, json!({}), 0)
        .build()
        .await?;

    let result = link_api_key(
        State(test.into_app_state()),
        test.session.clone(),
        body(json!({ "apiKey": TEST_API_KEY })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
