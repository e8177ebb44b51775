// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;

/// The service's single failure kind: anything that goes wrong while
/// handling a chat request. Clients see no finer-grained taxonomy; every
/// value maps to HTTP 500 carrying the failure's textual description.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AppError(String);

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            status: "error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
