//! Serve command: run the MCP server on stdio.

use clap::Args;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{debug, info, instrument};

use blogscore_core::PostAnalyzer;

use crate::server::BlogScoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve analysis tools over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    analyzer: PostAnalyzer,
    keywords: Vec<String>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(max_input_bytes = ?max_input_bytes, ?keywords, "executing serve command");

    let service = BlogScoreServer::new(analyzer, keywords, max_input_bytes)
        .serve(stdio())
        .await?;
    info!("MCP server listening on stdio");
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
