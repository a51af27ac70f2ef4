//! Politics & War GraphQL fixtures.
//!
//! `factory` builds JSON payloads shaped like the GraphQL API's responses and `mockito`
//! registers them on the mock server.

use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn pnw<'a>(&'a mut self) -> PnwFixtures<'a> {
        PnwFixtures { setup: self }
    }
}

pub struct PnwFixtures<'a> {
    pub setup: &'a mut TestContext,
}
