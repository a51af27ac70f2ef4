use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AllianceDto {
    pub alliance_id: i64,
    pub name: String,
    pub acronym: Option<String>,
    pub slug: String,
    pub color: Option<String>,
    pub score: Option<f64>,
    pub member_count: u64,
    pub updated_at: NaiveDateTime,
}

/// Stored snapshot of one alliance member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AllianceMemberDto {
    pub nation_id: i64,
    pub nation_name: Option<String>,
    pub leader_name: Option<String>,
    pub score: Option<f64>,
    pub cities: Option<i32>,
    pub soldiers: Option<i32>,
    pub tanks: Option<i32>,
    pub aircraft: Option<i32>,
    pub ships: Option<i32>,
    pub missiles: Option<i32>,
    pub nukes: Option<i32>,
    pub position: Option<String>,
    pub war_policy: Option<String>,
    pub domestic_policy: Option<String>,
    pub color: Option<String>,
    pub continent: Option<String>,
    pub last_active: Option<NaiveDateTime>,
    /// Whether the nation belongs to a signed in user
    pub linked: bool,
    pub updated_at: NaiveDateTime,
}

/// How the requesting user relates to the alliance being viewed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ViewerDto {
    pub is_member: bool,
    pub nation_name: Option<String>,
    pub position: Option<String>,
    pub can_sync: bool,
}

/// Everything the alliance page renders, read fresh on every request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlliancePageDto {
    pub alliance: AllianceDto,
    /// Ordered by score, highest first, unscored members last
    pub members: Vec<AllianceMemberDto>,
    pub viewer: ViewerDto,
}

/// Body of `POST /api/sync-alliance`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SyncAllianceRequest {
    #[serde(default)]
    pub alliance_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SyncAllianceResponse {
    pub success: bool,
    pub synced_members: u64,
    pub total_members: u64,
    /// Present when some members could not be stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
