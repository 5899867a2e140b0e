use async_trait::async_trait;
use serde::Serialize;
use reqwest::Client;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::prompt::Prompt;

/// Text-completion backend: one prompt in, one raw text reply out.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String>;
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a Prompt) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part { text: prompt.preamble },
                    Part { text: &prompt.body },
                ],
            }],
        }
    }
}

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.google_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| {
                AppError::ModelError(
                    "no API key configured (MANIDEEP_GOOGLE_API_KEY or GOOGLE_API_KEY)".to_string(),
                )
            })?;

        let res = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;

        let status = res.status();
        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::ModelError(format!("Invalid response from model ({}): {}", status, e)))?;

        if !status.is_success() {
            let message = json["error"]["message"].as_str().unwrap_or("no error message");
            return Err(AppError::ModelError(format!("{}: {}", status, message)));
        }

        extract_text(&json)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(json: &serde_json::Value) -> Result<String> {
    let text = json["candidates"][0]["content"]["parts"]
        .as_array()
        .filter(|parts| !parts.is_empty())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<String>()
        });

    match text {
        Some(text) => Ok(text),
        None => {
            let reason = json["promptFeedback"]["blockReason"]
                .as_str()
                .or_else(|| json["candidates"][0]["finishReason"].as_str())
                .unwrap_or("no candidate returned");
            Err(AppError::ModelError(format!("Model returned no text ({})", reason)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_sends_preamble_then_body() {
        let prompt = Prompt {
            preamble: "role",
            body: "instructions".to_string(),
        };
        let body = serde_json::to_value(GenerateContentRequest::from_prompt(&prompt)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "role" }, { "text": "instructions" }]
                }]
            })
        );
    }

    #[test]
    fn text_parts_are_concatenated() {
        let reply = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": " 1}" }] },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&reply).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn blocked_prompt_is_a_model_error() {
        let reply = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_text(&reply).unwrap_err();
        assert!(matches!(err, AppError::ModelError(msg) if msg.contains("SAFETY")));
    }

    #[test]
    fn candidate_without_parts_is_a_model_error() {
        let reply = json!({ "candidates": [{ "content": { "parts": [] }, "finishReason": "RECITATION" }] });
        let err = extract_text(&reply).unwrap_err();
        assert!(matches!(err, AppError::ModelError(msg) if msg.contains("RECITATION")));
    }

    #[tokio::test]
    async fn missing_key_fails_the_call() {
        let config = Config::from_lookup(|_| None).unwrap();
        let client = GeminiClient::new(&config);
        let prompt = Prompt {
            preamble: "role",
            body: String::new(),
        };
        let err = client.generate(&prompt).await.unwrap_err();
        assert!(matches!(err, AppError::ModelError(msg) if msg.contains("MANIDEEP_GOOGLE_API_KEY")));
    }
}
