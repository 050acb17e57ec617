//! Argument validation for the `generate_image` tool.
//!
//! Tool arguments arrive as untyped JSON. [`GenerationRequest::parse`] runs the
//! field checks in a fixed order and either yields a typed request or the
//! first [`ValidationError`] encountered.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output resolutions accepted by the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Resolution {
    #[serde(rename = "1024x1024")]
    Square1024,
    #[serde(rename = "960x1280")]
    Portrait960x1280,
    #[serde(rename = "768x1024")]
    Portrait768x1024,
    #[serde(rename = "720x1440")]
    Portrait720x1440,
    #[serde(rename = "720x1280")]
    Portrait720x1280,
}

impl Resolution {
    /// Every supported resolution, in the order they are advertised.
    pub const ALL: [Resolution; 5] = [
        Resolution::Square1024,
        Resolution::Portrait960x1280,
        Resolution::Portrait768x1024,
        Resolution::Portrait720x1440,
        Resolution::Portrait720x1280,
    ];

    /// The `WIDTHxHEIGHT` form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Square1024 => "1024x1024",
            Resolution::Portrait960x1280 => "960x1280",
            Resolution::Portrait768x1024 => "768x1024",
            Resolution::Portrait720x1440 => "720x1440",
            Resolution::Portrait720x1280 => "720x1280",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "resolution",
                    format!(
                        "unsupported resolution '{}'; expected one of {}",
                        s,
                        Resolution::ALL.map(|r| r.as_str()).join(", ")
                    ),
                )
            })
    }
}

/// A single failed check. Only the field name and a short reason are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: &'static str,
    /// Description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A validated image generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    resolution: Resolution,
    seed: Option<u64>,
}

impl GenerationRequest {
    /// Build a request from already-typed parts. The prompt is trimmed and
    /// must not be empty.
    pub fn new(
        prompt: impl AsRef<str>,
        resolution: Resolution,
        seed: Option<u64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            prompt: check_prompt(prompt.as_ref())?,
            resolution,
            seed,
        })
    }

    /// Parse untyped tool arguments.
    ///
    /// Checks run in order: the value is an object, `prompt` is a non-blank
    /// string, `resolution` is a supported value, and `seed`, when present,
    /// is a non-negative integer.
    pub fn parse(args: &Value) -> Result<Self, ValidationError> {
        let fields = require_object(args)?;
        let prompt = parse_prompt(fields.get("prompt"))?;
        let resolution = parse_resolution(fields.get("resolution"))?;
        let seed = parse_seed(fields.get("seed"))?;

        Ok(Self {
            prompt,
            resolution,
            seed,
        })
    }

    /// The trimmed prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn require_object(args: &Value) -> Result<&Map<String, Value>, ValidationError> {
    args.as_object()
        .ok_or_else(|| ValidationError::new("arguments", "expected a JSON object"))
}

fn check_prompt(prompt: &str) -> Result<String, ValidationError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("prompt", "prompt cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn parse_prompt(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(prompt)) => check_prompt(prompt),
        Some(_) => Err(ValidationError::new("prompt", "prompt must be a string")),
        None => Err(ValidationError::new("prompt", "prompt is required")),
    }
}

fn parse_resolution(value: Option<&Value>) -> Result<Resolution, ValidationError> {
    match value {
        Some(Value::String(resolution)) => resolution.parse(),
        Some(_) => Err(ValidationError::new("resolution", "resolution must be a string")),
        None => Err(ValidationError::new("resolution", "resolution is required")),
    }
}

/// Absent and `null` both mean "no seed". Integral floats and decimal strings
/// are coerced; anything negative, fractional or non-numeric is rejected.
fn parse_seed(value: Option<&Value>) -> Result<Option<u64>, ValidationError> {
    let invalid = || ValidationError::new("seed", "seed must be a non-negative integer");

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(seed) = n.as_u64() {
                return Ok(Some(seed));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                    Ok(Some(f as u64))
                }
                _ => Err(invalid()),
            }
        }
        Some(Value::String(s)) => s.trim().parse::<u64>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
