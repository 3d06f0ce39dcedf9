//! Hot listing tool implementation
//!
//! Implements the `get_subreddit_hot` MCP tool

use crate::cli::SubredditHotArgs;
use crate::error::{validate_name, AppError};
use crate::reddit::ContentClient;
use crate::tools::format::format_listing;
use tracing::info;

/// Execute hot listing tool
pub async fn execute_hot(
    client: &dyn ContentClient,
    args: SubredditHotArgs,
) -> Result<String, AppError> {
    validate_name("subreddit", &args.subreddit)?;

    info!("Hot posts request for r/{} (limit {})", args.subreddit, args.limit);

    let posts = client.subreddit_hot(&args.subreddit, args.limit).await?;
    Ok(format_listing(&posts))
}
