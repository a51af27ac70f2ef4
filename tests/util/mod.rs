//! Builds an [`AppState`] backed by a [`TestContext`] so controllers can be called directly.

use std::sync::Arc;

use roster::server::{
    config::{Config, SyncCredentialSource},
    discord::build_oauth_client,
    model::app::AppState,
};
use roster_test_utils::{
    constant::{TEST_CALLBACK_URL, TEST_DISCORD_CLIENT_ID, TEST_DISCORD_CLIENT_SECRET},
    TestContext,
};

pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    /// Application state pointing Discord and Politics & War at the mock server
    fn into_app_state(&self) -> AppState {
        let oauth_client = build_oauth_client(
            TEST_DISCORD_CLIENT_ID,
            TEST_DISCORD_CLIENT_SECRET,
            TEST_CALLBACK_URL,
            &self.server_url(),
        )
        .expect("Failed to build Discord OAuth2 client");

        let config = Config {
            discord_client_id: TEST_DISCORD_CLIENT_ID.to_string(),
            discord_client_secret: TEST_DISCORD_CLIENT_SECRET.to_string(),
            discord_callback_url: TEST_CALLBACK_URL.to_string(),
            discord_api_url: self.server_url(),
            database_url: "sqlite::memory:".to_string(),
            valkey_url: "redis://127.0.0.1:6379".to_string(),
            pnw_graphql_url: self.graphql_url(),
            sync_credential_source: SyncCredentialSource::Alliance,
        };

        AppState {
            db: self.db.clone(),
            http_client: self.http_client.clone(),
            oauth_client,
            config: Arc::new(config),
        }
    }
}

/// Reads a JSON response body.
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
