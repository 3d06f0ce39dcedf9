//! Post details tool implementation
//!
//! Implements the `get_post_details` MCP tool

use crate::cli::PostDetailsArgs;
use crate::error::{validate_name, AppError};
use crate::reddit::ContentClient;
use crate::tools::format::format_post_details;
use tracing::{debug, info};

/// Execute post details tool
///
/// Only comments the API has already resolved are rendered; "load more"
/// placeholders are never expanded.
pub async fn execute_post_details(
    client: &dyn ContentClient,
    args: PostDetailsArgs,
) -> Result<String, AppError> {
    validate_name("post_id", &args.post_id)?;

    info!("Post details request for {}", args.post_id);

    let post = client.submission(&args.post_id).await?;

    debug!(
        "Post {} has {} resolved top-level comments",
        post.id,
        post.comments.len()
    );

    Ok(format_post_details(&post, args.comment_limit as usize))
}
