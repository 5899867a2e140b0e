#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use ada_testcase_service::{
    api::routes::create_router,
    error::{AppError, Result},
    llm::ModelGateway,
    prompt::Prompt,
    AppState,
};

pub const PAGE_HTML: &str = r#"<html><body><img src="logo.png"><a href="/x">Go</a></body></html>"#;

/// Gateway returning a canned reply and recording every prompt it receives.
pub struct StubGateway {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<Prompt>>,
}

impl StubGateway {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().map_err(AppError::ModelError)
    }
}

pub fn app(gateway: Arc<StubGateway>) -> Router {
    create_router(AppState::new(gateway))
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub async fn page_server() -> SocketAddr {
    spawn(
        Router::new()
            .route("/page", get(|| async { Html(PAGE_HTML) }))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
            .route("/created", get(|| async { (StatusCode::CREATED, "made") })),
    )
    .await
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
