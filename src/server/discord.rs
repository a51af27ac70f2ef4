//! Discord OAuth2 client and profile lookup.

use dioxus_logger::tracing;
use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use serde::Deserialize;

use crate::server::error::{auth::AuthError, config::ConfigError, Error};

/// OAuth2 scopes requested at login.
pub const DISCORD_SCOPES: [&str; 2] = ["identify", "email"];

/// Discord OAuth2 client with the authorize and token endpoints configured.
pub type DiscordOAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Profile returned by Discord's `/users/@me`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl DiscordUser {
    /// CDN URL of the user's avatar, if they have set one.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.id, hash
            )
        })
    }
}

/// Builds the OAuth2 client against `api_url`, which is Discord's API base URL in
/// production and the mock server in tests.
pub fn build_oauth_client(
    client_id: &str,
    client_secret: &str,
    callback_url: &str,
    api_url: &str,
) -> Result<DiscordOAuthClient, ConfigError> {
    let auth_url = format!("{}/oauth2/authorize", api_url);
    let token_url = format!("{}/oauth2/token", api_url);

    Ok(BasicClient::new(ClientId::new(client_id.to_string()))
        .set_client_secret(ClientSecret::new(client_secret.to_string()))
        .set_auth_uri(AuthUrl::new(auth_url.clone()).map_err(|_| ConfigError::InvalidUrl {
            name: "Discord authorize",
            url: auth_url,
        })?)
        .set_token_uri(TokenUrl::new(token_url.clone()).map_err(|_| {
            ConfigError::InvalidUrl {
                name: "Discord token",
                url: token_url,
            }
        })?)
        .set_redirect_uri(RedirectUrl::new(callback_url.to_string()).map_err(|_| {
            ConfigError::InvalidUrl {
                name: "Discord callback",
                url: callback_url.to_string(),
            }
        })?))
}

/// Fetches the profile of the user owning `access_token`.
pub async fn fetch_current_user(
    http_client: &reqwest::Client,
    api_url: &str,
    access_token: &str,
) -> Result<DiscordUser, Error> {
    let response = http_client
        .get(format!("{}/users/@me", api_url))
        .bearer_auth(access_token)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = %status, "Discord profile request failed");

        return Err(AuthError::DiscordLoginFailed(format!(
            "profile request returned {}",
            status
        ))
        .into());
    }

    Ok(response.json().await?)
}
