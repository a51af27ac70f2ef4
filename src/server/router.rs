//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Start Discord login
/// - `GET /api/auth/callback` - Discord OAuth2 callback
/// - `GET /api/auth/logout` - Sign out
/// - `GET /api/auth/user` - Signed in user and linked nation
/// - `POST /api/link-api-key` - Verify and link a Politics & War API key
/// - `GET /api/alliance/{slug}` - Alliance page
/// - `POST /api/sync-alliance` - Refresh an alliance's roster
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::account::ACCOUNT_TAG, description = "Politics & War account linking API routes"),
        (name = controller::alliance::ALLIANCE_TAG, description = "Alliance roster API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::account::link_api_key))
        .routes(routes!(controller::alliance::get_alliance))
        .routes(routes!(controller::alliance::sync_alliance))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
