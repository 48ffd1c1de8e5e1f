// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// Errors surfaced by the ask endpoint. The display text is what the caller sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid message")]
    InvalidInput,

    #[error("Failed to process your request. Please check that your API key is configured correctly.")]
    UpstreamFailure,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
