use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the Politics & War GraphQL API.
#[derive(Error, Debug)]
pub enum PnwError {
    /// The API key was rejected or does not belong to a nation.
    #[error("Politics & War rejected the API key: {0}")]
    InvalidCredential(String),
    /// Transport failure, non-success status, GraphQL error, or a malformed response.
    #[error("Politics & War API request failed: {0}")]
    Unavailable(String),
}

impl IntoResponse for PnwError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredential(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid API key. Please check that it is correct and try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Unavailable(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Politics & War could not be reached, please try again later."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
