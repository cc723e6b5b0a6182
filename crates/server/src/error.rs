//! JSON error bodies and the mapping from core errors to HTTP statuses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use logo_forge_core::LogoError;

/// Message returned for every internal failure.
pub const GENERATION_FAILED: &str = "Failed to generate logos";

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Status plus body, the error half of every handler's result.
pub type ErrorResponse = (StatusCode, Json<ApiError>);

/// Caller mistakes become 400 with the message; everything else is logged
/// and becomes an opaque 500.
pub fn from_logo_error(err: LogoError) -> ErrorResponse {
    match err {
        LogoError::InvalidInput(message) => (StatusCode::BAD_REQUEST, Json(ApiError::new(message))),
        other => {
            error!(error = %other, "logo generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(GENERATION_FAILED)),
            )
        }
    }
}

/// Any body the JSON extractor refuses (bad syntax, wrong content type).
pub fn from_json_rejection(rejection: JsonRejection) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(
            "Request body must be valid JSON",
            rejection.body_text(),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_bad_requests() {
        let (status, Json(body)) = from_logo_error(LogoError::InvalidInput("name is required".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "name is required");
    }

    #[test]
    fn other_errors_hide_details() {
        let (status, Json(body)) =
            from_logo_error(LogoError::MalformedFilters("expected an object, got string".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, GENERATION_FAILED);
        assert!(body.details.is_none());
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::new("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope" }));
    }
}
