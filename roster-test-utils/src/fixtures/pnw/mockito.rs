//! Politics & War GraphQL mock endpoint creation utilities.
//!
//! Every query is a POST to the same path, so endpoints are told apart by the request's
//! `operationName` and, for paged queries, the `page` variable.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::TEST_GRAPHQL_PATH,
    fixtures::pnw::{factory, PnwFixtures},
};

impl<'a> PnwFixtures<'a> {
    /// Create a mock `me` query endpoint.
    ///
    /// # Arguments
    /// - `api_key` - API key the request must carry in `X-Api-Key`
    /// - `status` - HTTP status to respond with
    /// - `body` - JSON body to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_me_endpoint(
        &mut self,
        api_key: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_GRAPHQL_PATH)
            .match_header("x-api-key", api_key)
            .match_body(Matcher::PartialJson(json!({ "operationName": "Me" })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for one page of the alliance members query.
    ///
    /// # Arguments
    /// - `api_key` - API key the request must carry in `X-Api-Key`
    /// - `page` - 1-based page number the request must ask for
    /// - `members` - Member records returned for the page
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_alliance_members_endpoint(
        &mut self,
        api_key: &str,
        page: u32,
        members: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.create_alliance_members_status_endpoint(
            api_key,
            page,
            200,
            factory::nations_response(members),
            expected_requests,
        )
    }

    /// Create a mock endpoint for one page of the alliance members query with a custom
    /// status and body, used to simulate upstream failures.
    pub fn create_alliance_members_status_endpoint(
        &mut self,
        api_key: &str,
        page: u32,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_GRAPHQL_PATH)
            .match_header("x-api-key", api_key)
            .match_body(Matcher::PartialJson(json!({
                "operationName": "AllianceMembers",
                "variables": { "page": page },
            })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock alliance members endpoint that answers every page with the same full
    /// page of `page_size` members, as an upstream ignoring the `page` variable would.
    pub fn create_full_alliance_members_endpoint(
        &mut self,
        api_key: &str,
        page_size: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_GRAPHQL_PATH)
            .match_header("x-api-key", api_key)
            .match_body(Matcher::PartialJson(json!({ "operationName": "AllianceMembers" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::nations_response(factory::mock_members(1, page_size)).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create mock endpoints serving `total` members split into pages of `page_size`.
    ///
    /// Each page endpoint expects exactly one request. When `total` is an exact multiple of
    /// `page_size` a trailing empty page is served as well, since paging only stops on a
    /// short page.
    pub fn create_alliance_roster_endpoints(
        &mut self,
        api_key: &str,
        first_nation_id: i64,
        total: usize,
        page_size: usize,
    ) -> Vec<Mock> {
        let members = factory::mock_members(first_nation_id, total);
        let mut mocks = Vec::new();
        let mut chunks: Vec<Vec<Value>> = members
            .chunks(page_size)
            .map(|chunk| chunk.to_vec())
            .collect();

        if total % page_size == 0 {
            chunks.push(Vec::new());
        }

        for (index, chunk) in chunks.into_iter().enumerate() {
            let page = index as u32 + 1;
            mocks.push(self.create_alliance_members_endpoint(api_key, page, chunk, 1));
        }

        mocks
    }
}
