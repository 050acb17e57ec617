//! Server startup integration tests.
//!
//! Tests that the MCP server can be instantiated from configuration and
//! provides correct server info.

use kolors_mcp_common::Config;

/// Test configuration for integration tests.
fn test_config() -> Config {
    Config::from_lookup(|name| match name {
        "SILICONFLOW_API_KEY" => Some("sk-test".to_string()),
        "SILICONFLOW_BASE_URL" => Some("http://127.0.0.1:9/v1".to_string()),
        "HISTORY_CAPACITY" => Some("3".to_string()),
        _ => None,
    })
    .expect("test configuration should load")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolors_mcp_common::{ConfigError, Transport, TransportMode};
    use kolors_mcp_image::ImageServer;
    use rmcp::ServerHandler;

    #[test]
    fn test_image_server_startup() {
        let server = ImageServer::new(test_config());
        let info = server.get_info();

        let instructions = info.instructions.as_ref().unwrap().to_lowercase();
        assert!(instructions.contains("image"), "Server instructions should mention 'image'");
        assert!(instructions.contains("generate_image"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[tokio::test]
    async fn test_history_capacity_follows_config() {
        let server = ImageServer::new(test_config());
        assert_eq!(server.history().capacity(), 3);
        assert!(server.resources().await.is_empty());
    }

    #[test]
    fn test_startup_fails_without_api_key() {
        let result = Config::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_default_transport_is_stdio() {
        let transport = TransportMode::default();
        assert_eq!(transport, TransportMode::Stdio);
        assert!(Transport::default().is_stdio());
    }
}
