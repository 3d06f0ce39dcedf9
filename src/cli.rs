//! CLI mode implementation
//!
//! The argument structs double as the MCP tool argument contracts: the same
//! types are deserialized from `tools/call` payloads and rendered into the
//! advertised JSON schemas.

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 5;
pub const DEFAULT_COMMENT_LIMIT: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_comment_limit() -> u32 {
    DEFAULT_COMMENT_LIMIT
}

/// reddit-mcp CLI
#[derive(Parser)]
#[command(name = "reddit-mcp")]
#[command(about = "Read-only Reddit search and listing utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for posts in a specific subreddit
    Search(SearchSubredditArgs),
    /// Get detailed information about a specific Reddit post
    Post(PostDetailsArgs),
    /// Get hot posts from a specific subreddit
    Hot(SubredditHotArgs),
}

/// search_subreddit arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SearchSubredditArgs {
    /// Name of the subreddit to search
    #[arg(short = 's', long)]
    #[schemars(description = "Name of the subreddit to search")]
    pub subreddit: String,

    /// Search query
    #[arg(short = 'q', long)]
    #[schemars(description = "Search query")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT)]
    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of results to return")]
    pub limit: u32,
}

/// get_post_details arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PostDetailsArgs {
    /// ID of the Reddit post
    #[arg(short = 'p', long)]
    #[schemars(description = "ID of the Reddit post")]
    pub post_id: String,

    /// Maximum number of comments to fetch
    #[arg(short = 'c', long, default_value_t = DEFAULT_COMMENT_LIMIT)]
    #[serde(default = "default_comment_limit")]
    #[schemars(description = "Maximum number of comments to fetch")]
    pub comment_limit: u32,
}

/// get_subreddit_hot arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SubredditHotArgs {
    /// Name of the subreddit
    #[arg(short = 's', long)]
    #[schemars(description = "Name of the subreddit")]
    pub subreddit: String,

    /// Maximum number of posts to return
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT)]
    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of posts to return")]
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_args_defaults_limit() {
        let args: SearchSubredditArgs =
            serde_json::from_value(json!({ "subreddit": "rust", "query": "tokio" })).unwrap();
        assert_eq!(args.limit, 5);
    }

    #[test]
    fn test_post_args_defaults_comment_limit() {
        let args: PostDetailsArgs = serde_json::from_value(json!({ "post_id": "abc" })).unwrap();
        assert_eq!(args.comment_limit, 10);
    }

    #[test]
    fn test_hot_args_missing_subreddit_fails() {
        let result = serde_json::from_value::<SubredditHotArgs>(json!({ "limit": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_hot_subcommand() {
        let cli = Cli::try_parse_from(["reddit-mcp", "hot", "--subreddit", "rust"]).unwrap();
        match cli.command {
            Some(Commands::Hot(args)) => {
                assert_eq!(args.subreddit, "rust");
                assert_eq!(args.limit, DEFAULT_LIMIT);
            }
            _ => panic!("expected hot subcommand"),
        }
    }

    #[test]
    fn test_cli_parses_post_subcommand() {
        let cli =
            Cli::try_parse_from(["reddit-mcp", "post", "-p", "1abcde", "-c", "3", "--verbose"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Post(args)) => {
                assert_eq!(args.post_id, "1abcde");
                assert_eq!(args.comment_limit, 3);
            }
            _ => panic!("expected post subcommand"),
        }
    }
}
