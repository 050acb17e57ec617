//! Configuration module for loading environment variables and settings.

use crate::auth::AuthProvider;
use crate::error::ConfigError;

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "SILICONFLOW_API_KEY";

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_VAR: &str = "SILICONFLOW_BASE_URL";

/// Environment variable overriding the history capacity.
pub const HISTORY_CAPACITY_VAR: &str = "HISTORY_CAPACITY";

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";

/// Default number of generations kept in memory.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the upstream API (required)
    pub auth: AuthProvider,
    /// Upstream API base URL, without a trailing slash
    pub base_url: String,
    /// Maximum number of generation records kept in history
    pub history_capacity: usize,
}

impl Config {
    /// Create a configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            auth: AuthProvider::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Override the upstream base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Load configuration from environment variables and .env file.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` if `SILICONFLOW_API_KEY` is not set,
    /// or `ConfigError::InvalidValue` if an optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_env_var(API_KEY_VAR))?;

        let mut config = Self::new(api_key.trim());

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            let base_url = base_url.trim();
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ConfigError::invalid_value(
                    BASE_URL_VAR,
                    format!("expected an http(s) URL, got '{}'", base_url),
                ));
            }
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(HISTORY_CAPACITY_VAR) {
            let capacity = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| {
                    ConfigError::invalid_value(
                        HISTORY_CAPACITY_VAR,
                        format!("expected a positive integer, got '{}'", raw),
                    )
                })?;
            config = config.with_history_capacity(capacity);
        }

        Ok(config)
    }

    /// Full URL for an upstream API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
