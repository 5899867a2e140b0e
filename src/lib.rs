pub mod api;
pub mod config;
pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod llm;
pub mod prompt;

use std::sync::Arc;
use config::Config;
use fetcher::PageFetcher;
use llm::{GeminiClient, ModelGateway};

/// Application state shared across handlers; read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
    pub model: Arc<dyn ModelGateway>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelGateway>) -> Self {
        Self {
            fetcher: PageFetcher::new(),
            model,
        }
    }

    /// State backed by the Gemini client configured in `config`.
    pub fn with_gemini(config: &Config) -> Self {
        Self::new(Arc::new(GeminiClient::new(config)))
    }
}
