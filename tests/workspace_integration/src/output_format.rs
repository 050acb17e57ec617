//! Output format tests.
//!
//! Successful tool calls return a single Markdown image reference; upstream
//! failures return a single error text item.

use rmcp::model::{CallToolResult, Content, RawContent};

/// Validates that a CallToolResult has valid content format.
fn validate_tool_result(result: &CallToolResult) -> Result<(), String> {
    if result.content.is_empty() {
        return Err("Result should have content".to_string());
    }

    for content in &result.content {
        validate_content(content)?;
    }

    Ok(())
}

/// Only non-empty text content is produced by this server.
fn validate_content(content: &Content) -> Result<(), String> {
    match &content.raw {
        RawContent::Text(text_content) if text_content.text.is_empty() => {
            Err("Text content should not be empty".to_string())
        }
        RawContent::Text(_) => Ok(()),
        other => Err(format!("Expected text content, got {:?}", other)),
    }
}

/// Splits `![alt](url)` with an optional ` (Seed: N)` suffix.
fn parse_markdown_image(text: &str) -> Option<(&str, &str, Option<u64>)> {
    let rest = text.strip_prefix("![")?;
    let (alt, rest) = rest.split_once("](")?;
    let (url, rest) = rest.split_once(')')?;

    let seed = match rest {
        "" => None,
        suffix => Some(
            suffix
                .strip_prefix(" (Seed: ")?
                .strip_suffix(')')?
                .parse()
                .ok()?,
        ),
    };
    Some((alt, url, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolors_mcp_image::format_markdown;
    use proptest::prelude::*;

    #[test]
    fn test_validate_tool_result() {
        let ok = CallToolResult::success(vec![Content::text("![a cat](https://x/img.png)")]);
        assert!(validate_tool_result(&ok).is_ok());

        let empty = CallToolResult::success(vec![]);
        assert!(validate_tool_result(&empty).is_err());

        let blank = CallToolResult::success(vec![Content::text("")]);
        assert!(validate_tool_result(&blank).is_err());
    }

    #[test]
    fn test_error_result_is_flagged() {
        let err = CallToolResult::error(vec![Content::text("Error generating image: HTTP 400")]);
        assert_eq!(err.is_error, Some(true));
        assert!(validate_tool_result(&err).is_ok());
    }

    #[test]
    fn test_markdown_exact_format() {
        let text = format_markdown("a cat", "https://x/img.png", Some(42));
        assert_eq!(text, "![a cat](https://x/img.png) (Seed: 42)");
        assert_eq!(parse_markdown_image(&text), Some(("a cat", "https://x/img.png", Some(42))));
    }

    proptest! {
        #[test]
        fn markdown_output_is_well_formed(
            prompt in "[a-z][a-z ]{0,80}",
            file in "[a-z0-9]{1,12}",
            seed in proptest::option::of(any::<u64>()),
        ) {
            let url = format!("https://cdn.example/{}.png", file);
            let text = format_markdown(&prompt, &url, seed);
            let result = CallToolResult::success(vec![Content::text(text.clone())]);
            prop_assert!(validate_tool_result(&result).is_ok());

            let (alt, parsed_url, parsed_seed) = parse_markdown_image(&text).unwrap();
            prop_assert_eq!(parsed_url, url.as_str());
            prop_assert_eq!(parsed_seed, seed);

            let alt_chars = alt.chars().count();
            if prompt.chars().count() > 50 {
                prop_assert_eq!(alt_chars, 53);
                prop_assert!(alt.ends_with("..."));
            } else {
                prop_assert_eq!(alt, prompt.as_str());
            }
        }
    }
}
