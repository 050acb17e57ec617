//! Kolors MCP Image Server
//!
//! MCP server for image generation using the Kolors model on SiliconFlow.

use anyhow::Result;
use clap::Parser;
use kolors_mcp_common::{Config, McpServerBuilder, TransportArgs};
use kolors_mcp_image::ImageServer;

/// Command-line arguments for the image server.
#[derive(Parser, Debug)]
#[command(name = "kolors-mcp-image")]
#[command(about = "MCP server for image generation using Kolors on SiliconFlow")]
struct Args {
    /// Transport configuration
    #[command(flatten)]
    transport: TransportArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    kolors_mcp_common::tracing::init_tracing();

    tracing::info!("kolors-mcp-image server starting...");

    let args = Args::parse();

    let config = Config::from_env()?;
    tracing::info!(
        base_url = %config.base_url,
        history_capacity = config.history_capacity,
        "Configuration loaded"
    );

    let server = ImageServer::new(config);

    let transport = args.transport.into_transport();
    tracing::info!(transport = %transport, "Starting MCP server");

    McpServerBuilder::new(server)
        .with_transport(transport)
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
