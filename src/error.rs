//! Error types and handling for the Reddit MCP server

use thiserror::Error;

/// Application error types
///
/// Every variant is rendered as text by the dispatcher; none of them
/// escapes to the protocol layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code used in logs and CLI exit codes
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Api(_) => "api_error",
            AppError::Network(_) => "network_error",
            AppError::Parse(_) => "parse_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            AppError::Network(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Convert url::ParseError to AppError
impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Configuration(format!("Invalid Reddit endpoint URL: {}", err))
    }
}

/// Reject blank subreddit names and post ids before they reach the API
pub fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} cannot be empty", field)));
    }
    Ok(())
}
