//! Error types for the common library.
//!
//! This module provides a unified error hierarchy using `thiserror` for consistent
//! error handling across the Kolors MCP crates.
//!
//! # Error Categories
//!
//! - `ConfigError`: Missing or invalid configuration
//! - `Error::Api`: Upstream API answered with a non-success status
//! - `Error::Network`: Upstream API could not be reached
//! - `Error::ResponseShape`: Upstream API succeeded but the body could not be interpreted

use thiserror::Error;

/// Errors from calling the upstream generation API.
#[derive(Debug, Error)]
pub enum Error {
    /// API errors with endpoint and HTTP status context
    ///
    /// Includes the API endpoint that failed, HTTP status code, and the best
    /// message that could be extracted from the error body.
    #[error("API error for {endpoint} (HTTP {status_code}): {message}")]
    Api {
        /// The API endpoint that was called
        endpoint: String,
        /// HTTP status code returned by the API
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// The request never produced an HTTP response
    #[error("Network error for {endpoint}: {message}")]
    Network {
        /// The API endpoint that was called
        endpoint: String,
        /// Description of the transport failure
        message: String,
    },

    /// Successful response whose body does not have the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    ResponseShape {
        /// The API endpoint that was called
        endpoint: String,
        /// What was missing or malformed
        message: String,
    },
}

impl Error {
    /// Create a new API error with endpoint, status code, and message.
    ///
    /// # Example
    ///
    /// ```
    /// use kolors_mcp_common::error::Error;
    ///
    /// let err = Error::api(
    ///     "https://api.siliconflow.cn/v1/images/generations",
    ///     500,
    ///     "Internal server error"
    /// );
    /// assert!(err.to_string().contains("api.siliconflow.cn"));
    /// assert!(err.to_string().contains("500"));
    /// ```
    pub fn api(endpoint: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a new response shape error.
    ///
    /// # Example
    ///
    /// ```
    /// use kolors_mcp_common::error::Error;
    ///
    /// let err = Error::response_shape("https://example.com/v1/images", "missing images[0].url");
    /// assert!(err.to_string().contains("images[0].url"));
    /// ```
    pub fn response_shape(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ResponseShape {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from talking to the upstream service.
    ///
    /// Upstream failures are reported to the agent as error-flagged tool
    /// results rather than protocol errors.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Network { .. })
    }

    /// HTTP status code, if the upstream answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Configuration errors.
///
/// These errors occur when loading or validating configuration from
/// environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new missing environment variable error.
    pub fn missing_env_var(name: impl Into<String>) -> Self {
        ConfigError::MissingEnvVar(name.into())
    }

    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}
