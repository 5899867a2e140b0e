use reqwest::{Client, StatusCode};
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};

// One client for the whole process so connections are pooled across requests.
// Timeouts and redirect policy stay at reqwest's defaults.
static CLIENT: Lazy<Client> = Lazy::new(Client::new);

pub const NOT_SCRAPABLE: &str = "Could not scrape the website. Please send a valid website URL.";

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            client: CLIENT.clone(),
        }
    }

    /// Fetches `url` with a single GET and returns the body text.
    ///
    /// Transport failures and 4xx/5xx answers surface as "Error accessing URL";
    /// any other status that is not exactly 200 is rejected afterwards.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(accessing_url)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, %status, "page answered with a non-200 status");
            return Err(AppError::FetchError(NOT_SCRAPABLE.to_string()));
        }

        let html = response.text().await.map_err(accessing_url)?;
        tracing::info!(%url, bytes = html.len(), "fetched page");
        Ok(html)
    }
}

fn accessing_url(err: reqwest::Error) -> AppError {
    AppError::FetchError(format!("Error accessing URL: {}", err))
}
