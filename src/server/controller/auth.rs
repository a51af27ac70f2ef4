use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Starts a Discord login by redirecting to Discord's authorize page
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord to sign in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.oauth_client);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Discord redirects here after the user approves the login
///
/// Exchanges the code, creates or refreshes the user and starts their session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued at login"),
        ("code" = String, Query, description = "Discord authorization code"),
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the dashboard"),
        (status = 400, description = "CSRF state mismatch or missing parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let callback_service = CallbackService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config.discord_api_url,
    );

    let user_id = callback_service.handle_callback(&params.0.code).await?;

    SessionUserId::insert(&session, user_id).await?;

    Ok(Redirect::temporary("/dashboard"))
}

/// Signs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails in the store, so only clear real ones
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the signed in user and their linked nation
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
