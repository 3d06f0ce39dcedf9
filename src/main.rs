//! reddit-mcp MCP Server & CLI
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Implements three read-only tools:
//! - `search_subreddit(subreddit, query, limit)` - Search posts in a subreddit
//! - `get_post_details(post_id, comment_limit)` - A post and its top comments
//! - `get_subreddit_hot(subreddit, limit)` - Hot posts of a subreddit

mod cli;
mod config;
mod error;
mod http;
mod mcp;
mod reddit;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use error::AppError;
use reddit::{ContentClientFactory, RedditClientFactory};
use std::sync::Arc;
use tools::Dispatcher;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        run_cli_mode().await
    } else {
        run_mcp_mode().await
    }
}

/// Log to stderr; stdout carries protocol frames or tool output
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    init_logging(log_level);

    let Some(command) = cli.command else {
        eprintln!("Error: No command specified. Use --help for usage information.");
        std::process::exit(1);
    };

    match execute_cli_command(command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e.message());
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute one CLI subcommand through the same handlers the MCP tools use
async fn execute_cli_command(command: Commands) -> Result<String, AppError> {
    let client = RedditClientFactory::from_env().connect()?;

    match command {
        Commands::Search(args) => tools::search::execute_search(client.as_ref(), args).await,
        Commands::Post(args) => tools::post::execute_post_details(client.as_ref(), args).await,
        Commands::Hot(args) => tools::hot::execute_hot(client.as_ref(), args).await,
    }
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) | AppError::Configuration(_) => 1,
        AppError::Network(_) | AppError::Api(_) => 2,
        AppError::NotFound(_) => 3,
        AppError::Parse(_) | AppError::Internal(_) => 5,
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    init_logging("info");

    info!("Starting Reddit MCP server...");

    let dispatcher = Dispatcher::new(Arc::new(RedditClientFactory::from_env()));

    if let Err(e) = mcp::handle_stdio(dispatcher).await {
        error!("Server error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
