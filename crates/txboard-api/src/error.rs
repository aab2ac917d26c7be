//! Error types for txboard-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use txboard_source::SourceError;

/// Errors surfaced by the HTTP API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The dataset source could not be fetched or decoded
    #[error("{0}")]
    Upstream(#[from] SourceError),

    /// The request carried an unusable parameter
    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

/// JSON error body, rendered as `{"message": ...}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            log::error!("{}", self);
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
