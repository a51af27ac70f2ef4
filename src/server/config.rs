//! Application configuration resolved once at startup.

use std::str::FromStr;

use crate::server::{error::config::ConfigError, pnw::DEFAULT_GRAPHQL_URL};

/// Default base URL for the Discord HTTP API and OAuth2 endpoints.
pub static DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api";

/// Where the alliance sync operation takes its Politics & War API key from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncCredentialSource {
    /// Any verified user whose cached alliance matches the alliance being synced.
    #[default]
    Alliance,
    /// The calling user's own key, only if it is verified for that alliance.
    Caller,
}

impl FromStr for SyncCredentialSource {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alliance" => Ok(Self::Alliance),
            "caller" => Ok(Self::Caller),
            other => Err(ConfigError::InvalidEnvValue {
                var: "SYNC_CREDENTIAL_SOURCE".to_string(),
                reason: format!("expected `alliance` or `caller`, got `{}`", other),
            }),
        }
    }
}

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_callback_url: String,
    pub discord_api_url: String,
    pub database_url: String,
    pub valkey_url: String,
    pub pnw_graphql_url: String,
    pub sync_credential_source: SyncCredentialSource,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_callback_url: required("DISCORD_CALLBACK_URL")?,
            discord_api_url: optional("DISCORD_API_URL")
                .unwrap_or_else(|| DEFAULT_DISCORD_API_URL.to_string()),
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            pnw_graphql_url: optional("PNW_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            sync_credential_source: match optional("SYNC_CREDENTIAL_SOURCE") {
                Some(value) => value.parse()?,
                None => SyncCredentialSource::default(),
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::SyncCredentialSource;

    /// Expect both credential sources to parse regardless of case or padding
    #[test]
    fn parses_credential_sources() {
        assert_eq!(
            "alliance".parse::<SyncCredentialSource>().unwrap(),
            SyncCredentialSource::Alliance
        );
        assert_eq!(
            " Caller ".parse::<SyncCredentialSource>().unwrap(),
            SyncCredentialSource::Caller
        );
    }

    /// Expect an error for an unknown credential source
    #[test]
    fn rejects_unknown_credential_source() {
        assert!("anyone".parse::<SyncCredentialSource>().is_err());
    }
}
