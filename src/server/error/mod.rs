//! Error types for the roster server.
//!
//! Each domain gets its own error enum with its own HTTP mapping. [`Error`] aggregates them
//! together with the library errors that bubble up through `?`, so controllers can return a
//! single type.

pub mod alliance;
pub mod auth;
pub mod config;
pub mod pnw;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        alliance::AllianceError, auth::AuthError, config::ConfigError, pnw::PnwError,
    },
};

/// Main error type for the roster server.
///
/// Domain errors carry their own status codes; everything else is treated as a 500 and logged.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    PnwError(#[from] PnwError),
    #[error(transparent)]
    AllianceError(#[from] AllianceError),
    /// Malformed request input, the message is returned to the client as is.
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PnwError(err) => err.into_response(),
            Self::AllianceError(err) => err.into_response(),
            Self::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with a generic 500 so internals never leak to clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
