//! MCP tools implementation
//!
//! The [`Dispatcher`] routes `tools/call` requests to the handlers and turns
//! every outcome into a single text content item.

pub mod catalog;
pub mod format;
pub mod hot;
pub mod post;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;


use crate::error::AppError;
use crate::mcp::ContentItem;
use crate::reddit::ContentClientFactory;
use catalog::ToolName;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes tool invocations to their handlers
///
/// Stateless across calls: every dispatch asks the factory for a fresh
/// content client.
#[derive(Clone)]
pub struct Dispatcher {
    factory: Arc<dyn ContentClientFactory>,
}

impl Dispatcher {
    pub fn new(factory: Arc<dyn ContentClientFactory>) -> Self {
        Self { factory }
    }

    /// Run one tool call; never fails
    ///
    /// Errors are rendered as `"{prefix}{error}"`, and an unknown tool name as
    /// `"Unknown tool: {name}"`.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Vec<ContentItem> {
        let Some(tool) = ToolName::parse(name) else {
            warn!("Unknown tool requested: {}", name);
            return vec![ContentItem::text(format!("Unknown tool: {}", name))];
        };

        let text = match self.run(tool, arguments).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Tool {} failed ({}): {}", tool, e.error_code(), e);
                format!("{}{}", tool.error_prefix(), e)
            }
        };

        vec![ContentItem::text(text)]
    }

    async fn run(&self, tool: ToolName, arguments: Value) -> Result<String, AppError> {
        let client = self.factory.connect()?;
        debug!("Dispatching {} with {}", tool, arguments);

        match tool {
            ToolName::SearchSubreddit => {
                search::execute_search(client.as_ref(), parse_arguments(arguments)?).await
            }
            ToolName::GetPostDetails => {
                post::execute_post_details(client.as_ref(), parse_arguments(arguments)?).await
            }
            ToolName::GetSubredditHot => {
                hot::execute_hot(client.as_ref(), parse_arguments(arguments)?).await
            }
        }
    }
}

/// Deserialize tool arguments, applying declared defaults
///
/// A missing payload is treated as an empty object; unknown fields are ignored.
fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, AppError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))
}
