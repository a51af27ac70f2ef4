use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The signed in user and the nation linked to their account, if any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub api_key_verified: bool,
    pub nation: Option<LinkedNationDto>,
    pub last_sync: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LinkedNationDto {
    pub nation_id: i64,
    pub nation_name: String,
    pub leader_name: Option<String>,
    pub alliance: Option<LinkedAllianceDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LinkedAllianceDto {
    pub alliance_id: i64,
    pub name: String,
    pub position: Option<String>,
    /// Slug of the alliance page, absent until the alliance has been recorded
    pub slug: Option<String>,
}

/// Body of `POST /api/link-api-key`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LinkApiKeyRequest {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LinkApiKeyResponse {
    pub success: bool,
    pub nation_name: String,
    pub alliance_name: Option<String>,
    pub alliance_slug: Option<String>,
}
