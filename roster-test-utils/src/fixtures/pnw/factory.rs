//! Factory functions for Politics & War GraphQL payloads.
//!
//! IDs are encoded as strings, matching the `ID` scalar the API returns.

use serde_json::{json, Value};

/// Nation owning an API key, as returned by the `me` query.
///
/// # Arguments
/// - `nation_id` - Politics & War nation ID
/// - `alliance` - `(alliance_id, alliance_name)` when the nation is in an alliance
pub fn mock_nation(nation_id: i64, alliance: Option<(i64, &str)>) -> Value {
    let (alliance_id, alliance, position) = match alliance {
        Some((alliance_id, name)) => (
            alliance_id.to_string(),
            json!({
                "id": alliance_id.to_string(),
                "name": name,
                "acronym": "TKR",
                "color": "blue",
                "score": 125_000.5,
            }),
            json!("MEMBER"),
        ),
        None => ("0".to_string(), Value::Null, json!("NOALLIANCE")),
    };

    json!({
        "id": nation_id.to_string(),
        "nation_name": format!("Nation {}", nation_id),
        "leader_name": format!("Leader {}", nation_id),
        "alliance_id": alliance_id,
        "alliance_position": position,
        "alliance": alliance,
    })
}

/// Alliance member record as returned by the paged `nations` query.
pub fn mock_member(nation_id: i64, score: f64) -> Value {
    json!({
        "id": nation_id.to_string(),
        "nation_name": format!("Nation {}", nation_id),
        "leader_name": format!("Leader {}", nation_id),
        "score": score,
        "num_cities": 12,
        "soldiers": 60_000,
        "tanks": 5_000,
        "aircraft": 900,
        "ships": 120,
        "missiles": 2,
        "nukes": 0,
        "alliance_position": "MEMBER",
        "war_policy": "ATTRITION",
        "domestic_policy": "MANIFEST_DESTINY",
        "color": "blue",
        "continent": "na",
        "last_active": "2025-10-30T12:00:00+00:00",
    })
}

/// `count` consecutive member records starting at `first_nation_id`.
pub fn mock_members(first_nation_id: i64, count: usize) -> Vec<Value> {
    (0..count as i64)
        .map(|offset| mock_member(first_nation_id + offset, 1_000.0 + offset as f64))
        .collect()
}

/// Successful `me` query response.
pub fn me_response(nation: Value) -> Value {
    json!({ "data": { "me": { "nation": nation } } })
}

/// `me` query response for a key without an owning nation.
pub fn me_without_nation_response() -> Value {
    json!({ "data": { "me": { "nation": null } } })
}

/// Successful `nations` query response for one page.
pub fn nations_response(members: Vec<Value>) -> Value {
    json!({ "data": { "nations": { "data": members } } })
}

/// GraphQL error response.
pub fn graphql_error_response(message: &str) -> Value {
    json!({
        "errors": [{ "message": message }],
        "data": null,
    })
}
