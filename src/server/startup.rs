use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    discord::{self, DiscordOAuthClient},
    error::Error,
};

/// User agent sent with every outgoing request to Discord and Politics & War
static USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used for Discord and Politics & War requests
///
/// Redirects are disabled as required by the OAuth2 token exchange.
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(http_client)
}

/// Build the Discord OAuth2 client from the configured credentials
pub fn build_discord_client(config: &Config) -> Result<DiscordOAuthClient, Error> {
    let oauth_client = discord::build_oauth_client(
        &config.discord_client_id,
        &config.discord_client_secret,
        &config.discord_callback_url,
        &config.discord_api_url,
    )?;

    Ok(oauth_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Cookies are only marked secure in release builds so local development works over http
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}
