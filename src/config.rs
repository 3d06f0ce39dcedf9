//! Reddit API credentials resolved from the process environment

use crate::error::AppError;

pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

/// User agent sent when `REDDIT_USER_AGENT` is not set
pub const DEFAULT_USER_AGENT: &str = "MCP-Reddit/1.0";

/// Static application credentials for the Reddit API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Credentials {
    /// Create credentials with the default user agent
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Resolve credentials from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve credentials through an arbitrary key lookup
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match (get(CLIENT_ID_VAR), get(CLIENT_SECRET_VAR)) {
            (Some(client_id), Some(client_secret)) => {
                let mut credentials = Self::new(client_id, client_secret);
                if let Some(user_agent) = get(USER_AGENT_VAR) {
                    credentials.user_agent = user_agent;
                }
                Ok(credentials)
            }
            _ => Err(AppError::Configuration(
                "Missing Reddit API credentials in environment variables".to_string(),
            )),
        }
    }
}
