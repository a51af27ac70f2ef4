//! Placeholder values shared across tests. None of these are real credentials.

/// Politics & War API key accepted by the mock GraphQL endpoints.
pub static TEST_API_KEY: &str = "test_pnw_api_key";

/// Discord snowflake used for the default test user.
pub static TEST_DISCORD_ID: &str = "100000000000000001";

/// Mock Discord OAuth2 client ID.
pub static TEST_DISCORD_CLIENT_ID: &str = "discord_client_id";

/// Mock Discord OAuth2 client secret.
pub static TEST_DISCORD_CLIENT_SECRET: &str = "discord_client_secret";

/// OAuth2 callback URL used in test login flows.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Path the mock server serves the Politics & War GraphQL API on.
pub static TEST_GRAPHQL_PATH: &str = "/graphql";
