//! Jenkins MCP Server
//!
//! A stateless MCP server exposing one tool, `list_jenkins_jobs`: given a
//! Jenkins server FQDN and an optional name filter, it performs a single
//! authenticated read against the Jenkins REST API and returns the job list
//! as structured text.
//!
//! Architecture:
//! - Configuration: request timeout from environment or defaults
//! - Handler: the tool's linear invoke pipeline (parse, validate, query)
//! - Server: JSON-RPC method dispatch (initialize, tools/list, tools/call)
//! - Stdio: newline-delimited JSON transport
//!
//! Each invocation is independent; the only shared state is the read-only
//! HTTP client and tool metadata, so concurrent calls need no coordination.

mod config;
mod handler;
mod server;
mod stdio;
mod tools;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handler::ToolHandler;
use crate::server::McpServer;
use jenkins_client::{EnvCredentials, JenkinsClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON-RPC transport.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jenkins_mcp=info,jenkins_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Jenkins MCP server");

    let config = load_config()?;
    info!("Loaded configuration: request_timeout={:?}", config.request_timeout);

    // Credentials stay lazy: nothing is read from the environment until the
    // first tool call resolves them.
    let client = JenkinsClient::with_timeout(Arc::new(EnvCredentials), config.request_timeout);

    let handler = ToolHandler::new(Arc::new(client));
    let server = McpServer::new(handler);

    info!("Serving tool '{}' over stdio", tools::TOOL_NAME);
    stdio::run(&server).await
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
