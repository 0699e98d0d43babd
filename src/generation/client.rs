use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::config::GenerationConfig;
use crate::error::{AppError, AppResult};
use crate::generation::{RoadmapGenerator, RoadmapPrompt, map_generation_status};

/// OpenAI-compatible chat-completions client.
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// HTTPS is required for remote generation services so the API key is
/// never sent in cleartext; plain HTTP is allowed only for localhost.
pub fn validate_base_url(base_url: &str) -> AppResult<()> {
    let parsed = url::Url::parse(base_url).map_err(|e| {
        AppError::Config(format!("Invalid GENERATION_BASE_URL '{}': {}", base_url, e))
    })?;

    let host = parsed.host_str().unwrap_or("");
    match parsed.scheme() {
        "https" => Ok(()),
        "http" => {
            let is_localhost =
                host == "localhost" || host == "127.0.0.1" || host == "[::1]" || host == "::1";
            if is_localhost {
                tracing::warn!(
                    "Using unencrypted HTTP for local generation service at '{}'",
                    base_url
                );
                Ok(())
            } else {
                Err(AppError::Config(format!(
                    "HTTP is only allowed for localhost generation services, got '{}'",
                    base_url
                )))
            }
        }
        scheme => Err(AppError::Config(format!(
            "Unsupported URL scheme '{}' in GENERATION_BASE_URL",
            scheme
        ))),
    }
}

/// Truncate a response body for logging without splitting a UTF-8
/// character.
pub fn truncate_for_log(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl ChatCompletionsClient {
    pub fn new(config: &GenerationConfig) -> AppResult<Self> {
        validate_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl RoadmapGenerator for ChatCompletionsClient {
    async fn generate(&self, prompt: &RoadmapPrompt) -> AppResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user },
            ],
            "response_format": { "type": "json_object" },
        });

        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!(model = %self.model, url = %url, "Requesting roadmap generation");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Generation request failed: {}", e);
                AppError::generation_failed(format!("request failed: {}", e))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::generation_failed(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                "Generation service error: {}",
                truncate_for_log(&text, 500)
            );
            return Err(map_generation_status(
                status.as_u16(),
                truncate_for_log(&text, 500),
            ));
        }

        tracing::debug!("Generation response: {}", truncate_for_log(&text, 2000));

        let data: Value = serde_json::from_str(&text).map_err(|e| {
            AppError::generation_failed(format!("malformed completion envelope: {}", e))
        })?;

        let content = data["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| AppError::generation_failed("no content in completion response"))?;

        Ok(content.to_string())
    }
}
