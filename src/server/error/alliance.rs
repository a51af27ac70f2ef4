use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AllianceError {
    #[error("Alliance ID {0} is not registered")]
    NotFound(i64),
    #[error("No alliance registered with slug {0:?}")]
    SlugNotFound(String),
    #[error("No verified API key is available to sync alliance ID {0}")]
    NoCredentialAvailable(i64),
}

impl IntoResponse for AllianceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotFound(_) | Self::SlugNotFound(_) => {
                (StatusCode::NOT_FOUND, "Alliance not found")
            }
            Self::NoCredentialAvailable(_) => (
                StatusCode::BAD_REQUEST,
                "No API key available for this alliance",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
