//! Error taxonomy for the review pipeline.
//!
//! Only validation, empty-source and total-assembly failures surface as HTTP
//! error responses. Sink faults stay inside [`crate::sheets`] and degrade to
//! a negative outcome flag in an otherwise successful response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that escape to the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid product URL provided")]
    InvalidProductUrl,

    #[error("No reviews found for the provided URL")]
    NoReviewsFound,

    #[error("Failed to process any reviews")]
    ProcessingFailed,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidProductUrl => StatusCode::BAD_REQUEST,
            ApiError::NoReviewsFound => StatusCode::NOT_FOUND,
            ApiError::ProcessingFailed | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }
        let detail = match &self {
            ApiError::Internal(e) => format!("Internal server error: {e}"),
            other => other.to_string(),
        };
        let body = Json(serde_json::json!({ "detail": detail }));
        (status, body).into_response()
    }
}

/// Faults inside the Google Sheets sink. These never cross the HTTP boundary;
/// `persist` catches them and maps to a not-persisted outcome.
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("JWT signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Sheets API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected API response: {0}")]
    Decode(#[from] serde_json::Error),
}
