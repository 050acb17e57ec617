//! Image generation handler for the Kolors MCP server.
//!
//! `ImageHandler` turns a validated [`GenerationRequest`] into one call to the
//! SiliconFlow generation endpoint, extracts the image URL and records the
//! outcome in the shared [`HistoryStore`].

use crate::history::{GenerationRecord, HistoryStore};
use crate::request::GenerationRequest;
use crate::resources::{PROMPT_PREVIEW_CHARS, truncate_chars};
use crate::upstream::{GENERATIONS_PATH, GenerationPayload, GenerationResponse, extract_error_message};
use chrono::Utc;
use kolors_mcp_common::config::Config;
use kolors_mcp_common::error::Error;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The record that was added to the history.
    pub record: Arc<GenerationRecord>,
    /// URL of the generated image.
    pub image_url: String,
    /// Seed echoed by the upstream, or the requested one.
    pub seed: Option<u64>,
}

impl Generation {
    /// Markdown image reference for the agent.
    pub fn to_markdown(&self) -> String {
        format_markdown(&self.record.prompt, &self.image_url, self.seed)
    }
}

/// `![alt](url)`, optionally followed by ` (Seed: N)`.
///
/// The alt text is the prompt cut to 50 characters.
pub fn format_markdown(prompt: &str, image_url: &str, seed: Option<u64>) -> String {
    let alt = truncate_chars(prompt, PROMPT_PREVIEW_CHARS);
    match seed {
        Some(seed) => format!("![{}]({}) (Seed: {})", alt, image_url, seed),
        None => format!("![{}]({})", alt, image_url),
    }
}

/// Image generation handler.
pub struct ImageHandler {
    /// Application configuration.
    pub config: Config,
    /// HTTP client for API requests.
    pub http: reqwest::Client,
    history: Arc<HistoryStore>,
}

impl ImageHandler {
    /// Create a handler with its own history sized from the configuration.
    pub fn new(config: Config) -> Self {
        let history = Arc::new(HistoryStore::new(config.history_capacity));
        Self::with_history(config, history)
    }

    /// Create a handler that records into an existing history store.
    pub fn with_history(config: Config, history: Arc<HistoryStore>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            history,
        }
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        self.config.endpoint(GENERATIONS_PATH)
    }

    /// Generate one image.
    ///
    /// # Errors
    /// * `Error::Api` - the upstream answered with a non-success status
    /// * `Error::Network` - the upstream could not be reached or the body could not be read
    /// * `Error::ResponseShape` - success status but no `images[0].url` in a JSON body
    ///
    /// The history is only touched on success.
    #[instrument(level = "info", name = "generate_image", skip(self, request), fields(prompt_len = request.prompt().len(), resolution = %request.resolution()))]
    pub async fn generate(&self, request: GenerationRequest) -> Result<Generation, Error> {
        let payload = GenerationPayload::from(&request);
        let endpoint = self.endpoint();
        debug!(endpoint = %endpoint, seed = ?payload.seed, "Calling image generation API");

        let response = self
            .http
            .post(&endpoint)
            .header(AUTHORIZATION, self.config.auth.bearer_header())
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::network(&endpoint, format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            warn!(status = status.as_u16(), message = %message, "Image generation API returned an error");
            return Err(Error::api(&endpoint, status.as_u16(), message));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network(&endpoint, format!("Failed to read response body: {}", e)))?;

        let raw: Value = serde_json::from_slice(&bytes).map_err(|e| {
            Error::response_shape(&endpoint, format!("response body is not JSON: {}", e))
        })?;

        let view = GenerationResponse::new(&raw);
        let image_url = view
            .image_url()
            .map_err(|missing| Error::response_shape(&endpoint, format!("missing {} in response", missing)))?
            .to_string();
        let seed = view.seed().or(request.seed());

        info!(seed = ?seed, "Image generated");

        let record = self
            .history
            .record(GenerationRecord::new(
                request.prompt(),
                request.resolution(),
                Some(image_url.clone()),
                raw,
                Utc::now(),
            ))
            .await;

        Ok(Generation {
            record,
            image_url,
            seed,
        })
    }
}
