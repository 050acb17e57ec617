//! Workspace-level integration tests for the Kolors MCP server.
//!
//! These tests verify:
//! - The server can be built from configuration and advertises its capabilities
//! - Tool registration and schema generation
//! - Input validation and output format across crate boundaries

pub mod input_validation;
pub mod output_format;
pub mod server_startup;
pub mod tool_schema;
