//! Kolors MCP Common Library
//!
//! Shared configuration, credential handling, error types, transport selection,
//! server lifecycle and tracing setup for the Kolors MCP server.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod tracing;
pub mod transport;


pub use auth::AuthProvider;
pub use config::Config;
pub use error::{ConfigError, Error};
pub use server::{McpServerBuilder, ServerError, shutdown_channel};
pub use transport::{Transport, TransportArgs, TransportMode};
