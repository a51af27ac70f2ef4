//! HTTP controller endpoints for the roster JSON API.
//!
//! Handlers pull what they need from [`AppState`](crate::server::model::app::AppState) and
//! the session, call a service and map the result to a response. Every handler is annotated
//! with `utoipa` so it shows up in the OpenAPI document.

pub mod account;
pub mod alliance;
pub mod auth;
pub mod util;
