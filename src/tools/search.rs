//! Search tool implementation
//!
//! Implements the `search_subreddit` MCP tool

use crate::cli::SearchSubredditArgs;
use crate::error::{validate_name, AppError};
use crate::reddit::ContentClient;
use crate::tools::format::format_listing;
use tracing::{debug, info};

/// Execute search tool (shared implementation for MCP and CLI)
pub async fn execute_search(
    client: &dyn ContentClient,
    args: SearchSubredditArgs,
) -> Result<String, AppError> {
    validate_name("subreddit", &args.subreddit)?;

    info!(
        "Search request in r/{} for {:?} (limit {})",
        args.subreddit, args.query, args.limit
    );

    let posts = client
        .search_subreddit(&args.subreddit, &args.query, args.limit)
        .await?;

    debug!("Search returned {} posts", posts.len());

    Ok(format_listing(&posts))
}
