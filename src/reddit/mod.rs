//! Reddit content access

pub mod client;
pub mod models;
pub mod provider;

pub use models::{Comment, Submission};
pub use provider::{ContentClient, ContentClientFactory, RedditClientFactory};
