//! Requests from the web client to the roster JSON API.

#[cfg(feature = "web")]
use reqwasm::http::{Request, RequestCredentials, Response};

#[cfg(feature = "web")]
use crate::model::{
    alliance::{AlliancePageDto, SyncAllianceRequest, SyncAllianceResponse},
    api::ErrorDto,
    user::{LinkApiKeyRequest, LinkApiKeyResponse, UserDto},
};

/// Retrieve the signed in user, `None` if nobody is signed in
#[cfg(feature = "web")]
pub async fn get_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let user = response
                .json::<UserDto>()
                .await
                .map_err(|e| format!("Failed to parse user data: {}", e))?;
            Ok(Some(user))
        }
        401 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Submit a Politics & War API key to be verified and linked to the signed in user
#[cfg(feature = "web")]
pub async fn link_api_key(api_key: String) -> Result<LinkApiKeyResponse, String> {
    let body = serde_json::to_string(&LinkApiKeyRequest {
        api_key: Some(api_key),
    })
    .map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::post("/api/link-api-key")
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<LinkApiKeyResponse>()
            .await
            .map_err(|e| format!("Failed to parse link response: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve everything the alliance page shows for `slug`
#[cfg(feature = "web")]
pub async fn get_alliance(slug: &str) -> Result<AlliancePageDto, String> {
    let response = Request::get(&format!("/api/alliance/{}", slug))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<AlliancePageDto>()
            .await
            .map_err(|e| format!("Failed to parse alliance data: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Ask the server to refresh an alliance's roster from Politics & War
#[cfg(feature = "web")]
pub async fn sync_alliance(alliance_id: i64) -> Result<SyncAllianceResponse, String> {
    let body = serde_json::to_string(&SyncAllianceRequest {
        alliance_id: Some(alliance_id),
    })
    .map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::post("/api/sync-alliance")
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<SyncAllianceResponse>()
            .await
            .map_err(|e| format!("Failed to parse sync response: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Message to show for a failed request, the API's `ErrorDto` if the body has one
#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("Request failed with status {}: {}", status, error_text)
    }
}
