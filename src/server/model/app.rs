use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, discord::DiscordOAuthClient};

/// State shared by every request handler.
///
/// The HTTP client is a connection pool; Politics & War clients are built from it per call
/// with the credential each operation resolves.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub oauth_client: DiscordOAuthClient,
    pub config: Arc<Config>,
}
