//! Static bearer credential for the upstream image API.
//!
//! The key is read once at startup and never changes. `Debug` output is
//! redacted so the configuration can be logged safely.

use std::fmt;
use std::sync::Arc;

/// Bearer token provider backed by a fixed API key.
#[derive(Clone)]
pub struct AuthProvider {
    token: Arc<str>,
}

impl AuthProvider {
    /// Wrap an API key.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}
