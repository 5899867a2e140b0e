use serde::Serialize;
use serde_json::Value;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crate::error::{AppError, Result};

pub const DECODE_FAILURE: &str = "Error decoding JSON response from the model";

/// Body returned in place of model output when `/send-url/` cannot produce it.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn from_error(err: &AppError) -> Self {
        let message = match err {
            AppError::DecodeError(_) => DECODE_FAILURE.to_string(),
            other => format!("An error occurred: {}", other),
        };
        Self { message }
    }
}

/// Tolerant policy: the decoded model JSON, or an [`ErrorEnvelope`], always
/// with status 200. Failures are only visible inside the body.
pub fn tolerant(result: Result<Value>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "model output unavailable, returning error envelope");
            (StatusCode::OK, Json(ErrorEnvelope::from_error(&err))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_use_the_fixed_message() {
        let envelope = ErrorEnvelope::from_error(&AppError::DecodeError("expected value".into()));
        assert_eq!(envelope.message, DECODE_FAILURE);
    }

    #[test]
    fn other_failures_carry_the_error_text() {
        let envelope = ErrorEnvelope::from_error(&AppError::ModelError("quota exceeded".into()));
        assert_eq!(envelope.message, "An error occurred: Model request failed: quota exceeded");
    }

    #[test]
    fn envelope_is_always_status_200() {
        let response = tolerant(Err(AppError::ModelError("down".into())));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
