//! MCP Server implementation for the Kolors image server.
//!
//! This module provides the MCP server handler that exposes:
//! - `generate_image` tool for text-to-image generation
//! - One resource per cached generation under `kolors://generations/images/`

use crate::handler::ImageHandler;
use crate::history::HistoryStore;
use crate::request::{GenerationRequest, Resolution};
use crate::resources::{self, InvalidResourceUri};
use kolors_mcp_common::config::Config;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolResult, Content, ErrorCode, JsonObject, ListResourcesResult, ListToolsResult,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo, Tool,
    },
};
use schemars::JsonSchema;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Name of the only tool this server exposes.
pub const GENERATE_IMAGE_TOOL: &str = "generate_image";

/// MCP Server for image generation.
#[derive(Clone)]
pub struct ImageServer {
    handler: Arc<ImageHandler>,
}

/// Input schema advertised for generate_image.
///
/// Only the schema is derived. Incoming arguments are validated by
/// [`GenerationRequest::parse`], which also coerces loosely typed seeds.
#[derive(Debug, JsonSchema)]
pub struct GenerateImageToolParams {
    /// Text prompt describing the image to generate
    pub prompt: String,
    /// Output resolution (1024x1024, 960x1280, 768x1024, 720x1440, 720x1280)
    pub resolution: Resolution,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

impl ImageServer {
    /// Create a new ImageServer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            handler: Arc::new(ImageHandler::new(config)),
        }
    }

    /// Create a server around an existing history store.
    pub fn with_history(config: Config, history: Arc<HistoryStore>) -> Self {
        Self {
            handler: Arc::new(ImageHandler::with_history(config, history)),
        }
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        self.handler.history()
    }

    /// Tools advertised by this server.
    pub fn tools() -> Vec<Tool> {
        use schemars::schema_for;

        let schema = schema_for!(GenerateImageToolParams);
        let input_schema = match serde_json::to_value(&schema).unwrap_or_default() {
            Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        };

        vec![Tool {
            name: Cow::Borrowed(GENERATE_IMAGE_TOOL),
            description: Some(Cow::Borrowed(
                "Generate an image from a text prompt using the Kolors model on SiliconFlow. \
                 Returns a Markdown image reference to the hosted image, with the seed when known.",
            )),
            input_schema,
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        }]
    }

    /// Generate an image from untyped tool arguments.
    ///
    /// Invalid arguments fail with invalid params before any network call.
    /// Upstream failures come back as an error result so the agent can read
    /// them; anything else is an internal error.
    pub async fn generate_image(&self, arguments: Option<JsonObject>) -> Result<CallToolResult, McpError> {
        let args = Value::Object(arguments.unwrap_or_default());
        let request = GenerationRequest::parse(&args).map_err(|e| {
            debug!(field = e.field, reason = %e.message, "Rejected generate_image arguments");
            McpError::invalid_params("Invalid arguments for generate_image", None)
        })?;

        info!(resolution = %request.resolution(), seed = ?request.seed(), "Generating image");

        match self.handler.generate(request).await {
            Ok(generation) => Ok(CallToolResult::success(vec![Content::text(generation.to_markdown())])),
            Err(e) if e.is_upstream() => {
                warn!(error = %e, "Image generation failed upstream");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error generating image: {}",
                    e
                ))]))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }

    /// Route a tool call by name.
    pub async fn dispatch_tool(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, McpError> {
        match name {
            GENERATE_IMAGE_TOOL => self.generate_image(arguments).await,
            _ => Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
                None,
            )),
        }
    }

    /// One resource per cached generation, newest first.
    pub async fn resources(&self) -> Vec<Resource> {
        self.history()
            .list()
            .await
            .iter()
            .map(|(index, record)| resources::generation_resource(*index, record))
            .collect()
    }

    /// Full JSON of the generation addressed by `uri`.
    pub async fn read_generation(&self, uri: &str) -> Result<String, McpError> {
        let index = resources::parse_resource_uri(uri)
            .map_err(|InvalidResourceUri(uri)| McpError::invalid_request(format!("Invalid resource URI: {}", uri), None))?;

        let record = self.history().get(index).await.ok_or_else(|| {
            McpError::invalid_request(format!("Resource not found: {}", uri), None)
        })?;

        resources::generation_resource_json(&record)
            .map_err(|e| McpError::internal_error(format!("Failed to serialize generation: {}", e), None))
    }
}

impl ServerHandler for ImageServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Image generation server using the Kolors model on SiliconFlow. \
                 Use generate_image to create an image from a text prompt. \
                 Recent generations are available as kolors://generations/images/<index> resources."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: Self::tools(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParams,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.dispatch_tool(params.name.as_ref(), params.arguments).await }
    }

    fn list_resources(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        async move {
            let resources = self.resources().await;
            debug!(count = resources.len(), "Listing resources");

            Ok(ListResourcesResult {
                resources,
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        params: rmcp::model::ReadResourceRequestParams,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            let uri = &params.uri;
            debug!(uri = %uri, "Reading resource");

            let content = self.read_generation(uri).await?;

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(content, uri.clone())],
            })
        }
    }
}
