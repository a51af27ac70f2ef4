use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    discord::{fetch_current_user, DiscordOAuthClient},
    error::{auth::AuthError, Error},
};

/// Completes a Discord login: exchanges the authorization code, reads the profile and
/// creates or refreshes the matching user.
pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a DiscordOAuthClient,
    discord_api_url: &'a str,
}

impl<'a> CallbackService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a DiscordOAuthClient,
        discord_api_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_api_url,
        }
    }

    /// Handles the OAuth2 callback and returns the signed in user's ID.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created or refreshed user
    /// - `Err(Error::AuthError(AuthError::DiscordLoginFailed))` - Code exchange or profile
    ///   request rejected by Discord
    /// - `Err(Error)` - Transport or database failure
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::DiscordLoginFailed(format!("code exchange failed: {}", e)))?;

        let discord_user = fetch_current_user(
            self.http_client,
            self.discord_api_url,
            token.access_token().secret(),
        )
        .await?;

        let user = UserRepository::new(self.db)
            .upsert_from_discord(&discord_user)
            .await?;

        tracing::info!(
            user_id = %user.id,
            discord_id = %user.discord_id,
            "User signed in with Discord"
        );

        Ok(user.id)
    }
}
