use std::any::Any;
use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use podium_core::error::AppError;
use podium_core::models::ScrapeFailure;

use crate::dto::ErrorResponse;

/// An error response: status, machine-readable kind and diagnostic message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

impl ApiError {
    /// A resource-shaped scrape (one team, one challenge) that failed: 404.
    pub fn not_found(prefix: &str, failure: ScrapeFailure) -> Self {
        Self::from_failure(StatusCode::NOT_FOUND, "not_found", prefix, failure)
    }

    /// A listing scrape that failed: 500.
    pub fn scrape_failed(prefix: &str, failure: ScrapeFailure) -> Self {
        Self::from_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "scrape_failed",
            prefix,
            failure,
        )
    }

    fn from_failure(
        status: StatusCode,
        kind: &'static str,
        prefix: &str,
        failure: ScrapeFailure,
    ) -> Self {
        Self {
            status,
            kind,
            message: format!("{prefix}: {}", failure.message),
            context: failure.context,
        }
    }

    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "internal_error",
            message: format!("Internal server error: {message}"),
            context: BTreeMap::new(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let mut api_error = Self::internal(&err);
        if matches!(err, AppError::ConfigError(_)) {
            api_error.kind = "config_error";
        }
        api_error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(status = %self.status, kind = self.kind, message = %self.message, "Request failed");

        let body = ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
            context: self.context,
        };

        (self.status, axum::Json(body)).into_response()
    }
}

/// Turn a handler panic into a plain 500 JSON error.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal(message).into_response()
}
