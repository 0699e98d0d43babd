pub mod client;
pub mod prompt;

pub use client::ChatCompletionsClient;
pub use prompt::{RoadmapPrompt, build_roadmap_prompt};

use crate::error::{AppError, AppResult};
use async_trait::async_trait;

/// External text-generation service. The sole implementation speaks the
/// OpenAI-compatible chat-completions protocol; the trait exists so the
/// generation flow can be exercised against a scripted double.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Run one generation round-trip and return the raw message content.
    /// Transport and upstream-status failures are mapped here; whether the
    /// content is a usable roadmap document is decided by the caller via
    /// [`parse_roadmap_document`].
    async fn generate(&self, prompt: &RoadmapPrompt) -> AppResult<String>;
}

/// Map a non-success upstream status to the error the caller can act on.
/// Rate limiting and exhausted credits stay distinguishable; everything
/// else collapses to a generic failure.
pub fn map_generation_status(status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::RateLimited,
        402 => AppError::QuotaExhausted,
        _ => AppError::generation_failed(format!("upstream status {}: {}", status, body)),
    }
}

/// Validate generated content against the document contract: it must be
/// JSON and it must carry a `phases` array. Nothing deeper is checked
/// here; leaf fields are best-effort prompt output and consumers read
/// them defensively.
pub fn parse_roadmap_document(content: &str) -> AppResult<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|_| AppError::GenerationParse)?;

    match value.get("phases") {
        Some(phases) if phases.is_array() => Ok(value),
        _ => Err(AppError::GenerationSchema),
    }
}
