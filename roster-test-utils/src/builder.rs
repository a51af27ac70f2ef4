//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together, with all operations queued and executed during
//! the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};
use serde_json::Value;

use crate::{error::TestError, fixtures::pnw::factory, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixtures, and mock HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables and indexes to create
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,

    // Database fixtures to insert
    users: Vec<String>,
    verified_users: Vec<(String, i64, i64, String)>, // (discord_id, nation_id, alliance_id, api_key)
    alliances: Vec<(i64, String, String)>,           // (alliance_id, name, slug)
    members: Vec<(i64, i64, Option<f64>)>,           // (alliance_id, nation_id, score)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    me_endpoints: Vec<(String, usize, Value, usize)>,
    member_page_endpoints: Vec<(String, u32, usize, Value, usize)>,
    roster_endpoints: Vec<(String, i64, usize, usize)>,
    full_page_endpoints: Vec<(String, usize, usize)>,
    discord_logins: Vec<(String, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            users: Vec::new(),
            verified_users: Vec::new(),
            alliances: Vec::new(),
            members: Vec::new(),
            mock_builders: Vec::new(),
            me_endpoints: Vec::new(),
            member_page_endpoints: Vec::new(),
            roster_endpoints: Vec::new(),
            full_page_endpoints: Vec::new(),
            discord_logins: Vec::new(),
        }
    }

    /// Add every roster table to the test database.
    ///
    /// Creates `users`, `alliances`, and `alliance_members`, plus the unique index on
    /// `alliance_members (nation_id, alliance_id)` that member upserts conflict on.
    pub fn with_roster_tables(mut self) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.extend(vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Alliance),
            schema.create_table_from_entity(entity::prelude::AllianceMember),
        ]);
        self.indexes.push(
            Index::create()
                .name("idx-alliance_members-nation_id-alliance_id")
                .table(entity::prelude::AllianceMember)
                .col(entity::alliance_member::Column::NationId)
                .col(entity::alliance_member::Column::AllianceId)
                .unique()
                .to_owned(),
        );
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), roster_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user who has not linked a nation.
    pub fn with_user(mut self, discord_id: impl Into<String>) -> Self {
        self.users.push(discord_id.into());
        self
    }

    /// Insert a user with a verified API key for a nation in `alliance_id`.
    pub fn with_verified_user(
        mut self,
        discord_id: impl Into<String>,
        nation_id: i64,
        alliance_id: i64,
        api_key: impl Into<String>,
    ) -> Self {
        self.verified_users
            .push((discord_id.into(), nation_id, alliance_id, api_key.into()));
        self
    }

    /// Insert an alliance record.
    pub fn with_alliance(
        mut self,
        alliance_id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        self.alliances
            .push((alliance_id, name.into(), slug.into()));
        self
    }

    /// Insert an alliance member row. The alliance must be added with `with_alliance`.
    pub fn with_alliance_member(mut self, alliance_id: i64, nation_id: i64, score: Option<f64>) -> Self {
        self.members.push((alliance_id, nation_id, score));
        self
    }

    /// Add a mock `me` query endpoint.
    ///
    /// # Arguments
    /// - `api_key` - API key the request must carry
    /// - `status` - HTTP status to respond with
    /// - `body` - JSON body, usually from `factory::me_response`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_me_endpoint(
        mut self,
        api_key: impl Into<String>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.me_endpoints
            .push((api_key.into(), status, body, expected_requests));
        self
    }

    /// Add a mock endpoint for a single page of the alliance members query.
    pub fn with_alliance_members_page(
        mut self,
        api_key: impl Into<String>,
        page: u32,
        members: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.member_page_endpoints.push((
            api_key.into(),
            page,
            200,
            factory::nations_response(members),
            expected_requests,
        ));
        self
    }

    /// Add a mock endpoint for a single page of the alliance members query that answers
    /// with a custom status and body, used to simulate upstream failures mid-roster.
    pub fn with_alliance_members_status_page(
        mut self,
        api_key: impl Into<String>,
        page: u32,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.member_page_endpoints
            .push((api_key.into(), page, status, body, expected_requests));
        self
    }

    /// Add mock endpoints serving a whole roster of `total` generated members, paged by
    /// `page_size`, with nation IDs starting at `first_nation_id`.
    pub fn with_alliance_roster(
        mut self,
        api_key: impl Into<String>,
        first_nation_id: i64,
        total: usize,
        page_size: usize,
    ) -> Self {
        self.roster_endpoints
            .push((api_key.into(), first_nation_id, total, page_size));
        self
    }

    /// Add an alliance members endpoint returning a full page for every page requested.
    pub fn with_full_alliance_member_pages(
        mut self,
        api_key: impl Into<String>,
        page_size: usize,
        expected_requests: usize,
    ) -> Self {
        self.full_page_endpoints
            .push((api_key.into(), page_size, expected_requests));
        self
    }

    /// Add Discord token and profile endpoints for a successful login.
    pub fn with_discord_login(
        mut self,
        discord_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        self.discord_logins.push((discord_id.into(), username.into()));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables and indexes
    /// 2. Inserts database fixtures (users, alliances, members)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        setup.with_tables(self.tables, self.indexes).await?;

        // 2. Insert database fixtures
        for discord_id in self.users {
            setup.user().insert_user(&discord_id).await?;
        }

        for (alliance_id, name, slug) in self.alliances {
            setup
                .alliance()
                .insert_alliance(alliance_id, &name, &slug)
                .await?;
        }

        for (discord_id, nation_id, alliance_id, api_key) in self.verified_users {
            setup
                .user()
                .insert_verified_user(&discord_id, nation_id, alliance_id, &api_key)
                .await?;
        }

        for (alliance_id, nation_id, score) in self.members {
            setup
                .alliance()
                .insert_member(alliance_id, nation_id, score)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can shadow a shortcut endpoint
        // with an earlier, more specific mock on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (api_key, status, body, expected) in self.me_endpoints {
            mocks.push(
                setup
                    .pnw()
                    .create_me_endpoint(&api_key, status, body, expected),
            );
        }

        for (api_key, page, status, body, expected) in self.member_page_endpoints {
            mocks.push(
                setup
                    .pnw()
                    .create_alliance_members_status_endpoint(&api_key, page, status, body, expected),
            );
        }

        for (api_key, first_nation_id, total, page_size) in self.roster_endpoints {
            mocks.extend(setup.pnw().create_alliance_roster_endpoints(
                &api_key,
                first_nation_id,
                total,
                page_size,
            ));
        }

        for (api_key, page_size, expected) in self.full_page_endpoints {
            mocks.push(
                setup
                    .pnw()
                    .create_full_alliance_members_endpoint(&api_key, page_size, expected),
            );
        }

        for (discord_id, username) in self.discord_logins {
            mocks.extend(
                setup
                    .discord()
                    .create_login_endpoints(&discord_id, &username),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_roster_tables() {
        let result = TestBuilder::new().with_roster_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_fixtures() {
        let result = TestBuilder::new()
            .with_roster_tables()
            .with_user("1")
            .with_alliance(12, "The Knights Radiant", "the-knights-radiant")
            .with_verified_user("2", 5001, 12, "key")
            .with_alliance_member(12, 5001, Some(1500.0))
            .build()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_fails_for_member_without_alliance() {
        let result = TestBuilder::new()
            .with_roster_tables()
            .with_alliance_member(12, 5001, None)
            .build()
            .await;
        assert!(result.is_err());
    }
}
