//! Kanban Board MCP Server - Main Entry Point
//!
//! This is the main entry point for the board MCP server application.
//! The actual implementation is in the `kanban_mcp` library.

use anyhow::Result;
use clap::Parser;
use kanban_mcp::BoardServerHandler;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Kanban Board MCP Server - three-column drag-and-drop task board via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML seed file describing the starting board (built-in seed if omitted)
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "kanban_mcp=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let handler = BoardServerHandler::from_seed(args.seed.as_deref())?;
    info!(
        tasks = handler.snapshot().total_tasks(),
        "serving board over stdio"
    );
    serve_stdio(handler).await?;
    Ok(())
}
