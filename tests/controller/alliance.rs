use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster::server::{
    controller::alliance::{get_alliance, sync_alliance},
    model::session::user::SessionUserId,
};
use roster_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::util::{json_body, TestContextExt};

fn sync_body(alliance_id: i64) -> Bytes {
    Bytes::from(json!({ "allianceId": alliance_id }).to_string())
}

mod sync {
    use super::*;

    #[tokio::test]
    /// Expect 200 with every member stored and no warning
    async fn syncs_alliance_roster() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "The Knights Radiant", "the-knights-radiant")
            .with_verified_user(TEST_DISCORD_ID, 1_000, 77, TEST_API_KEY)
            .with_alliance_roster(TEST_API_KEY, 1_000, 150, 100)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["syncedMembers"], 150);
        assert_eq!(body["totalMembers"], 150);
        assert!(body.get("warning").is_none());
        assert_eq!(
            entity::prelude::AllianceMember::find().count(&test.db).await?,
            150
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 with a warning when a member cannot be stored
    async fn warns_about_skipped_members() -> Result<(), TestError> {
        let mut members = factory::mock_members(1, 3);
        members[0]["last_active"] = json!("not a timestamp");
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "Rose", "rose")
            .with_verified_user(TEST_DISCORD_ID, 1, 77, TEST_API_KEY)
            .with_alliance_members_page(TEST_API_KEY, 1, members, 1)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["syncedMembers"], 2);
        assert_eq!(body["totalMembers"], 3);
        assert!(body["warning"].is_string());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an alliance that has never been registered
    async fn fails_for_unknown_alliance() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_verified_user(TEST_DISCORD_ID, 1, 77, TEST_API_KEY)
            .with_alliance_members_page(TEST_API_KEY, 1, vec![], 0)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when no verified member of the alliance has a key
    async fn fails_without_credential() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "Rose", "rose")
            .with_user(TEST_DISCORD_ID)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "No API key available for this alliance");

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 and no stored members when a page request fails
    async fn fails_when_api_unavailable() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "Rose", "rose")
            .with_verified_user(TEST_DISCORD_ID, 1, 77, TEST_API_KEY)
            .with_alliance_members_status_page(TEST_API_KEY, 1, 500, json!({}), 1)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            entity::prelude::AllianceMember::find().count(&test.db).await?,
            0
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a missing or non-positive alliance ID
    async fn rejects_missing_alliance_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_roster_tables().with_user(TEST_DISCORD_ID).build().await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        for request in [sync_body(0), Bytes::from_static(b"{}"), Bytes::new()] {
            let result = sync_alliance(State(test.into_app_state()), test.session.clone(), request).await;

            let resp = result.err().unwrap().into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = json_body(resp).await;
            assert_eq!(body["error"], "Alliance ID is required");
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when nobody is signed in
    async fn rejects_unauthenticated_request() -> Result<(), TestError> {
        let test = TestBuilder::new().with_roster_tables().build().await?;

        let result = sync_alliance(State(test.into_app_state()), test.session.clone(), sync_body(77)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod page {
    use super::*;

    #[tokio::test]
    /// Expect 200 with members ordered by score and the viewer's standing
    async fn returns_alliance_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "The Knights Radiant", "the-knights-radiant")
            .with_verified_user(TEST_DISCORD_ID, 2, 77, TEST_API_KEY)
            .with_alliance_member(77, 1, Some(500.0))
            .with_alliance_member(77, 2, Some(900.0))
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = get_alliance(
            State(test.into_app_state()),
            test.session.clone(),
            Path("the-knights-radiant".to_string()),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["alliance"]["allianceId"], 77);
        assert_eq!(body["alliance"]["memberCount"], 2);
        assert_eq!(body["members"][0]["nationId"], 2);
        assert_eq!(body["members"][1]["nationId"], 1);
        assert_eq!(body["viewer"]["isMember"], true);
        assert_eq!(body["viewer"]["canSync"], true);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown slug
    async fn fails_for_unknown_slug() -> Result<(), TestError> {
        let test = TestBuilder::new().with_roster_tables().with_user(TEST_DISCORD_ID).build().await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = get_alliance(
            State(test.into_app_state()),
            test.session.clone(),
            Path("nobody".to_string()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when nobody is signed in
    async fn rejects_unauthenticated_request() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_alliance(77, "Rose", "rose")
            .build()
            .await?;

        let result = get_alliance(
            State(test.into_app_state()),
            test.session.clone(),
            Path("rose".to_string()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
