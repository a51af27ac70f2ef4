use serde::Serialize;
use serde_json::{json, Value};

pub(super) const ME_QUERY: &str = "query Me { me { nation { id nation_name leader_name alliance_id alliance_position alliance { id name acronym color score } } } }";

pub(super) const ALLIANCE_MEMBERS_QUERY: &str = "query AllianceMembers($allianceId: [Int], $first: Int, $page: Int) { nations(alliance_id: $allianceId, first: $first, page: $page) { data { id nation_name leader_name score num_cities soldiers tanks aircraft ships missiles nukes alliance_position war_policy domestic_policy color continent last_active } } }";

/// A GraphQL POST body. The operation name lets upstream logs and request matchers tell
/// queries apart since every query shares one endpoint.
#[derive(Serialize)]
pub(super) struct GraphQlRequest {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn me() -> Self {
        Self {
            query: ME_QUERY,
            operation_name: "Me",
            variables: json!({}),
        }
    }

    pub fn alliance_members(alliance_id: i64, first: u32, page: u32) -> Self {
        Self {
            query: ALLIANCE_MEMBERS_QUERY,
            operation_name: "AllianceMembers",
            variables: json!({
                "allianceId": [alliance_id],
                "first": first,
                "page": page,
            }),
        }
    }
}
