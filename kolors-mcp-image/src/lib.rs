//! Kolors MCP Image Server Library
//!
//! This library provides text-to-image generation through the Kolors model
//! hosted on SiliconFlow, with a bounded history of recent generations
//! exposed as MCP resources.

pub mod handler;
pub mod history;
pub mod request;
pub mod resources;
pub mod server;
pub mod upstream;

pub use handler::{Generation, ImageHandler, format_markdown};
pub use history::{GenerationRecord, HistoryStore};
pub use request::{GenerationRequest, Resolution, ValidationError};
pub use server::{GENERATE_IMAGE_TOOL, GenerateImageToolParams, ImageServer};
