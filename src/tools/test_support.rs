//! Stub content client shared by dispatcher and MCP tests

use crate::error::AppError;
use crate::reddit::{Comment, ContentClient, ContentClientFactory, Submission};
use crate::tools::Dispatcher;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn submission(id: &str) -> Submission {
    Submission {
        id: id.to_string(),
        title: format!("Post {}", id),
        score: 100,
        url: format!("https://www.reddit.com/r/test/comments/{}/", id),
        created_utc: 1700000000.0,
        author: Some("alice".to_string()),
        selftext: Some(String::new()),
        comments: Vec::new(),
    }
}

pub fn comment(author: &str, body: &str) -> Comment {
    Comment {
        author: Some(author.to_string()),
        score: 1,
        body: body.to_string(),
    }
}

/// Serves canned submissions and records every call it receives
#[derive(Clone, Default)]
pub struct StubClient {
    pub posts: Vec<Submission>,
    pub thread: Option<Submission>,
    pub failure: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubClient {
    pub fn with_posts(posts: Vec<Submission>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn with_thread(thread: Submission) -> Self {
        Self {
            thread: Some(thread),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(AppError::NotFound(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentClient for StubClient {
    async fn search_subreddit(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Submission>, AppError> {
        self.record(format!("search {} {} {}", subreddit, query, limit))?;
        Ok(self.posts.iter().take(limit as usize).cloned().collect())
    }

    async fn submission(&self, post_id: &str) -> Result<Submission, AppError> {
        self.record(format!("submission {}", post_id))?;
        self.thread
            .clone()
            .ok_or_else(|| AppError::NotFound("received 404 HTTP response".to_string()))
    }

    async fn subreddit_hot(&self, subreddit: &str, limit: u32) -> Result<Vec<Submission>, AppError> {
        self.record(format!("hot {} {}", subreddit, limit))?;
        Ok(self.posts.iter().take(limit as usize).cloned().collect())
    }
}

/// Hands out clones of one stub client, or a configuration error when unset
#[derive(Default)]
pub struct StubFactory {
    pub client: Option<StubClient>,
    pub connects: AtomicUsize,
}

impl ContentClientFactory for StubFactory {
    fn connect(&self) -> Result<Box<dyn ContentClient>, AppError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        match &self.client {
            Some(client) => Ok(Box::new(client.clone())),
            None => Err(AppError::Configuration(
                "Missing Reddit API credentials in environment variables".to_string(),
            )),
        }
    }
}

pub fn dispatcher_with(client: StubClient) -> (Dispatcher, Arc<StubFactory>) {
    let factory = Arc::new(StubFactory {
        client: Some(client),
        ..StubFactory::default()
    });
    (Dispatcher::new(factory.clone()), factory)
}

pub fn unconfigured_dispatcher() -> (Dispatcher, Arc<StubFactory>) {
    let factory = Arc::new(StubFactory::default());
    (Dispatcher::new(factory.clone()), factory)
}
