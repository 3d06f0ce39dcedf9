//! Static tool catalog advertised through `tools/list`

use crate::cli::{PostDetailsArgs, SearchSubredditArgs, SubredditHotArgs};
use schemars::schema_for;
use serde::Serialize;
use serde_json::Value;

/// The tools this server exposes, in advertised order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    SearchSubreddit,
    GetPostDetails,
    GetSubredditHot,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::SearchSubreddit,
        ToolName::GetPostDetails,
        ToolName::GetSubredditHot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::SearchSubreddit => "search_subreddit",
            ToolName::GetPostDetails => "get_post_details",
            ToolName::GetSubredditHot => "get_subreddit_hot",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::SearchSubreddit => "Search for posts in a specific subreddit",
            ToolName::GetPostDetails => "Get detailed information about a specific Reddit post",
            ToolName::GetSubredditHot => "Get hot posts from a specific subreddit",
        }
    }

    /// Prefix put in front of every failure rendered for this tool
    pub fn error_prefix(self) -> &'static str {
        match self {
            ToolName::SearchSubreddit => "Error searching subreddit: ",
            ToolName::GetPostDetails => "Error getting post details: ",
            ToolName::GetSubredditHot => "Error getting hot posts: ",
        }
    }

    /// JSON schema generated from the argument struct the handler deserializes
    pub fn input_schema(self) -> Value {
        let schema = match self {
            ToolName::SearchSubreddit => schema_for!(SearchSubredditArgs),
            ToolName::GetPostDetails => schema_for!(PostDetailsArgs),
            ToolName::GetSubredditHot => schema_for!(SubredditHotArgs),
        };
        serde_json::json!(schema)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool as advertised to MCP clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl From<ToolName> for ToolDescriptor {
    fn from(tool: ToolName) -> Self {
        Self {
            name: tool.as_str().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.input_schema(),
        }
    }
}

/// The full catalog, always the same three tools in the same order
pub fn list_tools() -> Vec<ToolDescriptor> {
    ToolName::ALL.into_iter().map(ToolDescriptor::from).collect()
}
