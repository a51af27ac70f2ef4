use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        alliance::{AlliancePageDto, SyncAllianceRequest, SyncAllianceResponse},
        api::ErrorDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::alliance::{AllianceViewService, SyncService},
    },
};

pub static ALLIANCE_TAG: &str = "alliance";

/// Reads the alliance page: alliance header, members by score and the viewer's standing
#[utoipa::path(
    get,
    path = "/api/alliance/{slug}",
    tag = ALLIANCE_TAG,
    params(("slug" = String, Path, description = "Alliance page slug")),
    responses(
        (status = 200, description = "Alliance page", body = AlliancePageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "No alliance with this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alliance(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let page = AllianceViewService::new(&state.db)
        .get_page(&slug, user.id)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Refreshes an alliance's stored roster from Politics & War
#[utoipa::path(
    post,
    path = "/api/sync-alliance",
    tag = ALLIANCE_TAG,
    request_body = SyncAllianceRequest,
    responses(
        (status = 200, description = "Roster synced", body = SyncAllianceResponse),
        (status = 400, description = "Missing alliance ID or no API key available", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Alliance not registered", body = ErrorDto),
        (status = 500, description = "Politics & War unavailable or internal error", body = ErrorDto)
    ),
)]
pub async fn sync_alliance(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let request: SyncAllianceRequest = serde_json::from_slice(&body).unwrap_or_default();
    let alliance_id = request
        .alliance_id
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::BadRequest("Alliance ID is required".to_string()))?;

    let outcome = SyncService::new(
        &state.db,
        &state.http_client,
        &state.config.pnw_graphql_url,
        state.config.sync_credential_source,
    )
    .sync(user.id, alliance_id)
    .await?;

    let warning = (outcome.synced < outcome.total).then(|| {
        format!(
            "{} of {} members could not be stored",
            outcome.total - outcome.synced,
            outcome.total
        )
    });

    Ok((
        StatusCode::OK,
        Json(SyncAllianceResponse {
            success: true,
            synced_members: outcome.synced,
            total_members: outcome.total,
            warning,
        }),
    ))
}
