//! Content client port used by the tool handlers.

use crate::config::Credentials;
use crate::error::AppError;
use crate::reddit::client::{RedditClient, RedditEndpoints};
use crate::reddit::models::Submission;
use async_trait::async_trait;

/// Read-only access to Reddit content.
///
/// Results are returned in the order the remote API produced them.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Search posts inside one subreddit, at most `limit` results
    async fn search_subreddit(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Submission>, AppError>;

    /// Fetch one post together with its already-resolved top-level comments
    async fn submission(&self, post_id: &str) -> Result<Submission, AppError>;

    /// Hot listing of one subreddit, at most `limit` results
    async fn subreddit_hot(&self, subreddit: &str, limit: u32) -> Result<Vec<Submission>, AppError>;
}

/// Builds a content client for a single dispatch.
///
/// Called once per tool invocation; clients are never shared between calls.
pub trait ContentClientFactory: Send + Sync {
    fn connect(&self) -> Result<Box<dyn ContentClient>, AppError>;
}

/// Factory that reads credentials from the environment on every call
pub struct RedditClientFactory {
    endpoints: RedditEndpoints,
}

impl RedditClientFactory {
    pub fn new(endpoints: RedditEndpoints) -> Self {
        Self { endpoints }
    }

    /// Factory targeting the endpoints named by the environment, or reddit.com
    pub fn from_env() -> Self {
        Self::new(RedditEndpoints::from_env())
    }
}

impl ContentClientFactory for RedditClientFactory {
    fn connect(&self) -> Result<Box<dyn ContentClient>, AppError> {
        let credentials = Credentials::from_env()?;
        let client = RedditClient::new(credentials, self.endpoints.clone())?;
        Ok(Box::new(client))
    }
}
