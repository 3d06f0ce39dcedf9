//! HTTP client utilities
//!
//! Provides the reqwest::Client used by the Reddit content client

use crate::error::AppError;
use reqwest::{redirect, Client};
use std::time::Duration;

/// Build a reqwest Client with the given timeout and user agent
///
/// Redirects are never followed: Reddit answers an unknown subreddit with a
/// redirect to its subreddit search page, which the caller reports as a
/// lookup failure. System proxy variables (HTTP_PROXY, HTTPS_PROXY, NO_PROXY)
/// are honored by reqwest itself.
pub fn client_builder(timeout: Duration, user_agent: &str) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))
}
