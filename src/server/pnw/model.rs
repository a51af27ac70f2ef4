//! Response shapes for the Politics & War GraphQL API.
//!
//! The API types every identifier as the GraphQL `ID` scalar, which arrives as a string in
//! practice but is occasionally a bare integer. [`deserialize_id`] accepts both.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl RawId {
    fn into_id<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            Self::Int(id) => Ok(id),
            Self::Str(id) => id
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid ID {:?}", id))),
        }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_id()
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer)?
        .map(RawId::into_id)
        .transpose()
}

/// The nation owning an API key, as returned by the `me` query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub nation_name: String,
    #[serde(default)]
    pub leader_name: Option<String>,
    /// `0` or absent when the nation is not in an alliance.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub alliance_id: Option<i64>,
    #[serde(default)]
    pub alliance_position: Option<String>,
    #[serde(default)]
    pub alliance: Option<NationAlliance>,
}

impl Nation {
    /// The nation's alliance, if it belongs to one.
    pub fn current_alliance(&self) -> Option<&NationAlliance> {
        match self.alliance_id {
            Some(id) if id > 0 => self.alliance.as_ref().filter(|alliance| alliance.id == id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationAlliance {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One alliance member as returned by the paged `nations` query.
///
/// `last_active` is kept as the raw timestamp string and parsed when the record is stored,
/// so a single malformed value fails only that member's row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllianceMemberRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub nation_name: Option<String>,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub num_cities: Option<i32>,
    #[serde(default)]
    pub soldiers: Option<i32>,
    #[serde(default)]
    pub tanks: Option<i32>,
    #[serde(default)]
    pub aircraft: Option<i32>,
    #[serde(default)]
    pub ships: Option<i32>,
    #[serde(default)]
    pub missiles: Option<i32>,
    #[serde(default)]
    pub nukes: Option<i32>,
    #[serde(default)]
    pub alliance_position: Option<String>,
    #[serde(default)]
    pub war_policy: Option<String>,
    #[serde(default)]
    pub domestic_policy: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub last_active: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
pub(super) struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize)]
pub(super) struct MeData {
    pub me: Option<MeNode>,
}

#[derive(Deserialize)]
pub(super) struct MeNode {
    pub nation: Option<Nation>,
}

#[derive(Deserialize)]
pub(super) struct NationsData {
    pub nations: NationsPage,
}

#[derive(Deserialize)]
pub(super) struct NationsPage {
    #[serde(default)]
    pub data: Vec<AllianceMemberRecord>,
}
