use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    FetchError(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Model request failed: {0}")]
    ModelError(String),

    #[error("Error decoding JSON response from the model: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::FetchError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ModelError(_) | AppError::DecodeError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side causes are logged, never echoed to the caller.
        let detail = match self {
            AppError::FetchError(msg) | AppError::InvalidRequest(msg) => msg,
            other => {
                tracing::error!(error = %other, "request failed");
                "Internal Server Error".to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
