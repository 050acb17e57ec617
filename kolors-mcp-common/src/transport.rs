//! Transport selection for the MCP server.
//!
//! - **Stdio**: default; the agent host spawns the server as a subprocess
//! - **HTTP**: streamable HTTP on a port, mounted at `/mcp`
//! - **SSE**: accepted for compatibility, served by the streamable HTTP service
//!
//! ```ignore
//! use kolors_mcp_common::transport::TransportArgs;
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct Args {
//!     #[command(flatten)]
//!     transport: TransportArgs,
//! }
//!
//! let transport = Args::parse().transport.into_transport();
//! ```

use clap::{Args, ValueEnum};
use std::fmt;

/// Transport the server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Standard input/output.
    #[default]
    Stdio,
    /// Streamable HTTP.
    Http {
        /// Port to listen on
        port: u16,
    },
    /// Server-Sent Events over HTTP.
    Sse {
        /// Port to listen on
        port: u16,
    },
}

impl Transport {
    /// Stdio transport.
    pub fn stdio() -> Self {
        Transport::Stdio
    }

    /// HTTP transport on `port`.
    pub fn http(port: u16) -> Self {
        Transport::Http { port }
    }

    /// SSE transport on `port`.
    pub fn sse(port: u16) -> Self {
        Transport::Sse { port }
    }

    pub fn is_stdio(&self) -> bool {
        matches!(self, Transport::Stdio)
    }

    /// The listening port for network transports.
    pub fn port(&self) -> Option<u16> {
        match self {
            Transport::Stdio => None,
            Transport::Http { port } | Transport::Sse { port } => Some(*port),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http { port } => write!(f, "http (port {})", port),
            Transport::Sse { port } => write!(f, "sse (port {})", port),
        }
    }
}

/// Command-line arguments for transport configuration.
#[derive(Args, Debug, Clone)]
pub struct TransportArgs {
    /// Transport mode
    #[arg(long, value_enum, ignore_case = true, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,

    /// Port for HTTP/SSE transport
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

/// Transport mode as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TransportMode {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl TransportArgs {
    /// Resolve the arguments into a [`Transport`]. The port is ignored for stdio.
    pub fn into_transport(self) -> Transport {
        match self.transport {
            TransportMode::Stdio => Transport::Stdio,
            TransportMode::Http => Transport::Http { port: self.port },
            TransportMode::Sse => Transport::Sse { port: self.port },
        }
    }
}

impl Default for TransportArgs {
    fn default() -> Self {
        Self {
            transport: TransportMode::Stdio,
            port: 8080,
        }
    }
}
