//! Reddit API client for search, hot listings and post threads

use crate::config::Credentials;
use crate::error::AppError;
use crate::reddit::models::{submission_from_thread, Listing, Submission};
use crate::reddit::provider::ContentClient;
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Largest page Reddit serves in a single listing request; longer
/// listings are fetched page by page
const MAX_PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Token and API endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditEndpoints {
    pub auth_url: String,
    pub api_base: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl RedditEndpoints {
    /// Honor `REDDIT_AUTH_URL` / `REDDIT_API_BASE` overrides
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            auth_url: var("REDDIT_AUTH_URL").unwrap_or(defaults.auth_url),
            api_base: var("REDDIT_API_BASE").unwrap_or(defaults.api_base),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Application-only Reddit client
///
/// The bearer token is requested lazily on the first API call and lives as
/// long as this client does.
pub struct RedditClient {
    client: reqwest::Client,
    credentials: Credentials,
    endpoints: RedditEndpoints,
    token: OnceCell<String>,
}

impl RedditClient {
    /// Create a client; performs no network I/O
    pub fn new(credentials: Credentials, endpoints: RedditEndpoints) -> Result<Self, AppError> {
        let client = crate::http::client_builder(REQUEST_TIMEOUT, &credentials.user_agent)?;
        Ok(Self::with_http(client, credentials, endpoints))
    }

    /// Create a client around an existing reqwest client
    pub fn with_http(
        client: reqwest::Client,
        credentials: Credentials,
        endpoints: RedditEndpoints,
    ) -> Self {
        Self {
            client,
            credentials,
            endpoints,
            token: OnceCell::new(),
        }
    }

    async fn access_token(&self) -> Result<&str, AppError> {
        self.token
            .get_or_try_init(|| self.fetch_token())
            .await
            .map(String::as_str)
    }

    async fn fetch_token(&self) -> Result<String, AppError> {
        debug!("Requesting application token from {}", self.endpoints.auth_url);

        let response = self
            .client
            .post(&self.endpoints.auth_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Token request failed: {}", e)))?;

        let token: TokenResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse token response: {}", e)))?;

        match (token.access_token, token.error) {
            (Some(access_token), None) => Ok(access_token),
            (_, Some(error)) => Err(AppError::Api(format!("error processing request ({})", error))),
            (None, None) => Err(AppError::Api("token response carried no access_token".to_string())),
        }
    }

    /// Build `{api_base}/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.endpoints.api_base)?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!(
                    "Reddit API base cannot carry a path: {}",
                    self.endpoints.api_base
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let token = self.access_token().await?;
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse Reddit response: {}", e)))
    }

    /// Walk the listing's `after` cursor until `limit` submissions are
    /// collected or the listing ends; never requests past `limit`
    async fn listing(
        &self,
        url: Url,
        query: Vec<(&str, String)>,
        limit: u32,
    ) -> Result<Vec<Submission>, AppError> {
        let limit = limit as usize;
        let mut submissions = Vec::with_capacity(limit.min(MAX_PAGE_SIZE as usize));
        let mut after: Option<String> = None;

        while submissions.len() < limit {
            let remaining = limit - submissions.len();
            let mut params = query.clone();
            params.push(("limit", remaining.min(MAX_PAGE_SIZE as usize).to_string()));
            params.push(("raw_json", "1".to_string()));
            if let Some(cursor) = after.take() {
                params.push(("after", cursor));
            }

            let listing: Listing = self.get_json(url.clone(), &params).await?;
            let next = listing.data.after.clone();
            let page = listing.into_submissions()?;
            if page.is_empty() {
                break;
            }
            submissions.extend(page);

            match next {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }

        submissions.truncate(limit);
        debug!("Received {} submissions", submissions.len());
        Ok(submissions)
    }
}

#[async_trait]
impl ContentClient for RedditClient {
    async fn search_subreddit(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Submission>, AppError> {
        let url = self.endpoint(&["r", subreddit, "search"])?;
        let params = vec![
            ("q", query.to_string()),
            ("restrict_sr", "1".to_string()),
            ("sort", "relevance".to_string()),
            ("t", "all".to_string()),
            ("syntax", "lucene".to_string()),
        ];
        self.listing(url, params, limit).await
    }

    async fn submission(&self, post_id: &str) -> Result<Submission, AppError> {
        let url = self.endpoint(&["comments", post_id])?;
        let listings: Vec<Listing> = self
            .get_json(url, &[("raw_json", "1".to_string())])
            .await?;
        submission_from_thread(listings, post_id)
    }

    async fn subreddit_hot(&self, subreddit: &str, limit: u32) -> Result<Vec<Submission>, AppError> {
        let url = self.endpoint(&["r", subreddit, "hot"])?;
        self.listing(url, Vec::new(), limit).await
    }
}

/// Map non-success statuses onto lookup failures
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        return Err(AppError::NotFound(format!("Redirect to {}", location)));
    }

    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound("received 404 HTTP response".to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    debug!("Reddit returned {}: {}", status, body);
    Err(AppError::Api(format!("received {} HTTP response", status.as_u16())))
}
