use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LinkApiKeyRequest, LinkApiKeyResponse},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error,
        model::app::AppState, service::account::LinkService,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Verifies a Politics & War API key and links its nation to the signed in user
///
/// The body is parsed leniently so that any malformed or missing key is answered with a
/// 400 rather than a framework rejection.
#[utoipa::path(
    post,
    path = "/api/link-api-key",
    tag = ACCOUNT_TAG,
    request_body = LinkApiKeyRequest,
    responses(
        (status = 200, description = "API key verified and linked", body = LinkApiKeyResponse),
        (status = 400, description = "Missing or invalid API key", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Politics & War unavailable or internal error", body = ErrorDto)
    ),
)]
pub async fn link_api_key(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let request: LinkApiKeyRequest = serde_json::from_slice(&body).unwrap_or_default();
    let api_key = request
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| Error::BadRequest("API key is required".to_string()))?;

    let response = LinkService::new(&state.db, &state.http_client, &state.config.pnw_graphql_url)
        .link_api_key(user.id, api_key)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}
