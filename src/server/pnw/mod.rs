//! Politics & War GraphQL API client.
//!
//! A [`PnwClient`] is built per call around an explicit API key, so the key used for each
//! request is always visible at the call site and nothing is cached between callers.

pub mod model;
mod query;

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::server::{
    error::pnw::PnwError,
    pnw::{
        model::{AllianceMemberRecord, GraphQlResponse, MeData, Nation, NationsData},
        query::GraphQlRequest,
    },
};

/// Production GraphQL endpoint, overridable through `PNW_GRAPHQL_URL`.
pub static DEFAULT_GRAPHQL_URL: &str = "https://api.politicsandwar.com/graphql";

/// Number of members requested per page. A page with fewer records is the last one.
pub const MEMBER_PAGE_SIZE: u32 = 100;

/// Most pages fetched for one alliance. An upstream that keeps returning full pages past
/// this is treated as unavailable.
pub const MAX_MEMBER_PAGES: u32 = 50;

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-Api-Key";

pub struct PnwClient<'a> {
    http_client: &'a reqwest::Client,
    url: &'a str,
    api_key: &'a str,
}

impl<'a> PnwClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, url: &'a str, api_key: &'a str) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }

    /// Looks up the nation owning the API key.
    ///
    /// # Returns
    /// - `Ok(Nation)` - The key is valid and belongs to a nation
    /// - `Err(PnwError::InvalidCredential)` - The key was rejected or owns no nation
    /// - `Err(PnwError::Unavailable)` - The API could not be reached or answered unexpectedly
    pub async fn me(&self) -> Result<Nation, PnwError> {
        let data: MeData = self.execute(GraphQlRequest::me()).await?;

        data.me.and_then(|me| me.nation).ok_or_else(|| {
            PnwError::InvalidCredential("API key is not associated with a nation".to_string())
        })
    }

    /// Fetches a single 1-based page of an alliance's members.
    pub async fn alliance_members_page(
        &self,
        alliance_id: i64,
        page: u32,
    ) -> Result<Vec<AllianceMemberRecord>, PnwError> {
        let data: NationsData = self
            .execute(GraphQlRequest::alliance_members(
                alliance_id,
                MEMBER_PAGE_SIZE,
                page,
            ))
            .await?;

        Ok(data.nations.data)
    }

    /// Fetches every member of an alliance, one page at a time, stopping at the first page
    /// holding fewer than [`MEMBER_PAGE_SIZE`] records.
    ///
    /// Any page failure aborts the whole fetch so callers never act on a partial roster.
    pub async fn alliance_members(
        &self,
        alliance_id: i64,
    ) -> Result<Vec<AllianceMemberRecord>, PnwError> {
        let mut members = Vec::new();
        let mut page = 1;

        loop {
            let records = self.alliance_members_page(alliance_id, page).await?;
            let fetched = records.len();

            tracing::debug!(
                alliance_id = %alliance_id,
                page = %page,
                fetched = %fetched,
                "Fetched alliance member page"
            );

            members.extend(records);

            if fetched < MEMBER_PAGE_SIZE as usize {
                break;
            }

            if page >= MAX_MEMBER_PAGES {
                return Err(PnwError::Unavailable(format!(
                    "alliance {} still returned full pages after {} pages",
                    alliance_id, MAX_MEMBER_PAGES
                )));
            }

            page += 1;
        }

        Ok(members)
    }

    async fn execute<T: DeserializeOwned>(&self, request: GraphQlRequest) -> Result<T, PnwError> {
        let operation = request.operation_name;

        let response = self
            .http_client
            .post(self.url)
            .header(API_KEY_HEADER, self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PnwError::Unavailable(format!("{} request failed: {}", operation, e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PnwError::InvalidCredential(format!(
                "{} request returned {}",
                operation, status
            )));
        }
        if !status.is_success() {
            return Err(PnwError::Unavailable(format!(
                "{} request returned {}",
                operation, status
            )));
        }

        let body: GraphQlResponse<T> = response.json().await.map_err(|e| {
            PnwError::Unavailable(format!("{} response could not be parsed: {}", operation, e))
        })?;

        if let Some(error) = body.errors.as_ref().and_then(|errors| errors.first()) {
            return Err(classify_graphql_error(operation, &error.message));
        }

        body.data
            .ok_or_else(|| PnwError::Unavailable(format!("{} response contained no data", operation)))
    }
}

/// The API reports rejected keys as GraphQL errors on a 200 response.
fn classify_graphql_error(operation: &str, message: &str) -> PnwError {
    let lowered = message.to_ascii_lowercase();
    let message = format!("{} returned an error: {}", operation, message);

    if lowered.contains("unauthorized")
        || lowered.contains("api key")
        || lowered.contains("api_key")
    {
        PnwError::InvalidCredential(message)
    } else {
        PnwError::Unavailable(message)
    }
}
