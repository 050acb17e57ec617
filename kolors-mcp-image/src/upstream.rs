//! Wire types for the SiliconFlow image generation API.
//!
//! The request body is a plain serializable struct. Response and error bodies
//! are kept as raw JSON and read through small views, since only a couple of
//! fields matter and the rest is stored verbatim in the history.

use crate::request::{GenerationRequest, Resolution};
use crate::resources::truncate_chars;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Path of the generation endpoint, relative to the configured base URL.
pub const GENERATIONS_PATH: &str = "images/generations";

/// Model identifier sent with every request.
pub const MODEL: &str = "Kwai-Kolors/Kolors";

/// Default number of denoising steps.
pub const DEFAULT_INFERENCE_STEPS: u32 = 20;

/// Default classifier-free guidance scale.
pub const DEFAULT_GUIDANCE_SCALE: f64 = 7.5;

/// Images requested per call.
pub const BATCH_SIZE: u32 = 1;

/// Longest raw error body echoed back when no message field is found.
const MAX_RAW_ERROR_CHARS: usize = 500;

/// JSON body of a generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPayload {
    pub model: &'static str,
    pub prompt: String,
    pub image_size: Resolution,
    pub batch_size: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl From<&GenerationRequest> for GenerationPayload {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            model: MODEL,
            prompt: request.prompt().to_string(),
            image_size: request.resolution(),
            batch_size: BATCH_SIZE,
            num_inference_steps: DEFAULT_INFERENCE_STEPS,
            guidance_scale: DEFAULT_GUIDANCE_SCALE,
            seed: request.seed(),
        }
    }
}

/// The first field found missing while looking for `images[0].url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Images,
    FirstImage,
    Url,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Images => write!(f, "images"),
            MissingField::FirstImage => write!(f, "images[0]"),
            MissingField::Url => write!(f, "images[0].url"),
        }
    }
}

/// Read-only view over a successful response body.
#[derive(Debug, Clone, Copy)]
pub struct GenerationResponse<'a> {
    body: &'a Value,
}

impl<'a> GenerationResponse<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self { body }
    }

    /// URL of the first generated image.
    pub fn image_url(&self) -> Result<&'a str, MissingField> {
        let images = match self.body.get("images") {
            Some(Value::Array(images)) => images,
            _ => return Err(MissingField::Images),
        };

        let first = match images.first() {
            Some(image) => image,
            None => return Err(MissingField::FirstImage),
        };

        match first.get("url") {
            Some(Value::String(url)) if !url.trim().is_empty() => Ok(url.as_str()),
            _ => Err(MissingField::Url),
        }
    }

    /// Seed echoed by the upstream, if it is a non-negative integer.
    pub fn seed(&self) -> Option<u64> {
        match self.body.get("seed") {
            Some(Value::Number(n)) => n.as_u64(),
            _ => None,
        }
    }
}

/// Read-only view over an error response body.
#[derive(Debug, Clone, Copy)]
pub struct ErrorBody<'a> {
    body: &'a Value,
}

impl<'a> ErrorBody<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self { body }
    }

    /// The first non-empty message among `error.message`, `message`,
    /// `error` (as a string) and `detail`.
    pub fn message(&self) -> Option<&'a str> {
        let nested = self.body.get("error").and_then(|e| e.get("message"));
        let candidates = [
            nested,
            self.body.get("message"),
            self.body.get("error"),
            self.body.get("detail"),
        ];

        candidates.into_iter().find_map(|candidate| match candidate {
            Some(Value::String(msg)) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        })
    }
}

/// Best-effort human-readable message from a raw error body.
///
/// Returns `None` only when the body is blank.
pub fn extract_error_message(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let from_json = serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|body| ErrorBody::new(&body).message().map(str::to_string));

    Some(from_json.unwrap_or_else(|| truncate_chars(raw, MAX_RAW_ERROR_CHARS)))
}
