use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::Response,
    Json,
};
use serde_json::Value;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use std::time::Instant;

use crate::error::Result;
use crate::api::models::{ApiJson, PersonaTestCaseRequest, UrlRequest};
use crate::api::response;
use crate::decoder::decode;
use crate::prompt::{self, Prompt};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/send-url/", post(send_url_handler))
        .route("/send-url", post(send_url_handler))
        .route("/persona_testcases", post(persona_testcases_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            // Every origin is accepted; echoing it lets credentials be allowed too.
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        )
        .with_state(app_state)
}

async fn hello_handler() -> Json<&'static str> {
    Json("Hello World")
}

/// Fetch failures are a 400; everything after the fetch is folded into a
/// 200 response by [`response::tolerant`].
async fn send_url_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UrlRequest>,
) -> Result<Response> {
    tracing::info!(url = %req.url, "generating ADA test cases");

    let html = state.fetcher.fetch(&req.url).await?;
    let prompt = prompt::ada_test_cases(&html);

    Ok(response::tolerant(generate_json(&state, &prompt).await))
}

/// Any model or decode failure propagates as a 500.
async fn persona_testcases_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PersonaTestCaseRequest>,
) -> Result<Json<Value>> {
    tracing::info!(
        persona = %req.name,
        objectives = req.objectives.len(),
        url = %req.page_weburl,
        "generating BDD feature"
    );

    let prompt = prompt::persona_feature(&req);
    let feature = generate_json(&state, &prompt).await?;
    Ok(Json(feature))
}

async fn generate_json(state: &AppState, prompt: &Prompt) -> Result<Value> {
    tracing::debug!(prompt_chars = prompt.len(), "calling model");
    let start = Instant::now();

    let reply = state.model.generate(prompt).await?;
    tracing::info!(elapsed = ?start.elapsed(), reply_chars = reply.len(), "model replied");
    tracing::debug!(%reply, "raw model reply");

    decode(&reply)
}
