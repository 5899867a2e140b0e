use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{de::DeserializeOwned, Deserialize};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonaTestCaseRequest {
    pub name: String,
    pub objectives: Vec<String>,
    pub page_weburl: String,
}

/// JSON body extractor. A body without `Content-Type` is still parsed as
/// JSON; every rejection becomes 422 `{"detail": ...}`.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(CONTENT_TYPE) {
            if !is_json(content_type.to_str().unwrap_or_default()) {
                return Err(AppError::InvalidRequest(
                    "Expected request with `Content-Type: application/json`".to_string(),
                ));
            }
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| AppError::InvalidRequest(format!("Invalid JSON body: {}", e)))
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
