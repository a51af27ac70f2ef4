//! Shared test harness for the roster workspace.
//!
//! Tests describe their environment with [`TestBuilder`] (tables, database fixtures, mock
//! HTTP endpoints) and receive a [`TestContext`] holding an in-memory SQLite database, an
//! in-memory session, and a mockito server standing in for Politics & War and Discord.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_API_KEY, TEST_DISCORD_ID},
        fixtures::pnw::factory,
        TestBuilder, TestContext, TestError,
    };
}
