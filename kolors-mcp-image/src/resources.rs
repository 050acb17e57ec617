//! MCP resources for the generation history.
//!
//! Each cached generation is addressable as
//! `kolors://generations/images/<index>`, where index 0 is the newest.

use crate::history::GenerationRecord;
use rmcp::model::{RawResource, Resource};
use thiserror::Error;

/// URI scheme for history resources.
pub const URI_SCHEME: &str = "kolors";

/// Prefix shared by every history resource URI.
pub const URI_PREFIX: &str = "kolors://generations/images/";

/// MIME type of resource contents.
pub const MIME_TYPE: &str = "application/json";

/// Characters of the prompt kept in names and alt text.
pub const PROMPT_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid resource URI: {0}")]
pub struct InvalidResourceUri(pub String);

/// URI of the history entry at `index`.
pub fn resource_uri(index: usize) -> String {
    format!("{}{}", URI_PREFIX, index)
}

/// Extract the history index from a resource URI.
pub fn parse_resource_uri(uri: &str) -> Result<usize, InvalidResourceUri> {
    let index = uri
        .strip_prefix(URI_PREFIX)
        .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| InvalidResourceUri(uri.to_string()))?;

    index
        .parse::<usize>()
        .map_err(|_| InvalidResourceUri(uri.to_string()))
}

/// `text` cut to `max` characters, with `...` appended when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Listing entry for one history record.
pub fn generation_resource(index: usize, record: &GenerationRecord) -> Resource {
    Resource {
        raw: RawResource {
            uri: resource_uri(index),
            name: truncate_chars(&record.prompt, PROMPT_PREVIEW_CHARS),
            title: None,
            description: Some(format!(
                "{} image generated at {} from prompt: {}",
                record.resolution, record.timestamp, record.prompt
            )),
            mime_type: Some(MIME_TYPE.to_string()),
            size: None,
            icons: None,
            meta: None,
        },
        annotations: None,
    }
}

/// Full record as pretty-printed JSON.
pub fn generation_resource_json(record: &GenerationRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}
