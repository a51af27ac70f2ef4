//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a mock HTTP server standing in for Politics & War and Discord,
//! a shared HTTP client, and a session store for testing authentication flows.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_GRAPHQL_PATH, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Database connection to an in-memory SQLite database
/// - HTTP client used to reach the mock server
/// - Session store
/// - Mock HTTP server and the mocks registered on it
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_roster_tables().build().await?;
///
/// let user = test.user().insert_user("1234").await?;
/// let client = PnwClient::new(&test.http_client, &test.graphql_url(), TEST_API_KEY);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session store for test authentication flows
    pub session: Session,
    /// HTTP client for requests against the mock server
    pub http_client: reqwest::Client,

    /// Mock HTTP server for upstream APIs
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::ReqwestError)` - HTTP client could not be built
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let http_client = reqwest::Client::builder().build()?;

        Ok(TestContext {
            db,
            session,
            http_client,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables and indexes from schema statements.
    ///
    /// Indexes run after every table exists so composite unique keys can be added to
    /// tables created in the same call.
    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server, used as the Discord API and OAuth2 base URL.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// URL of the mock Politics & War GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_GRAPHQL_PATH)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
