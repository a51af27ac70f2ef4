use oauth2::{CsrfToken, Scope};

use crate::server::discord::{DiscordOAuthClient, DISCORD_SCOPES};

/// Discord authorize URL together with the CSRF state it embeds.
pub struct AuthorizeUrl {
    pub login_url: String,
    pub state: String,
}

pub fn login_service(oauth_client: &DiscordOAuthClient) -> AuthorizeUrl {
    let (url, state) = oauth_client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(
            DISCORD_SCOPES
                .iter()
                .map(|scope| Scope::new(scope.to_string())),
        )
        .url();

    AuthorizeUrl {
        login_url: url.to_string(),
        state: state.secret().to_string(),
    }
}
