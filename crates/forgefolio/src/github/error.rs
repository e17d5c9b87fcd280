//! GitHub API error types.

use thiserror::Error;

use crate::http::HttpError;
use crate::platform::ProviderError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("GitHub resource not found: {0}")]
    NotFound(String),

    #[error("HTTP request error: {0}")]
    Http(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("JSON deserialization error: {0}")]
    Deserialize(String),
}

impl GitHubError {
    /// Classify a non-2xx HTTP status into a typed error.
    pub fn from_status(status: u16, body: &str, resource: &str) -> Self {
        if status == 404 {
            Self::NotFound(resource.to_string())
        } else {
            Self::Api {
                status,
                message: body.to_string(),
            }
        }
    }
}

impl From<HttpError> for GitHubError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => Self::Timeout(msg),
            other => Self::Http(other.to_string()),
        }
    }
}

impl From<GitHubError> for ProviderError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Api { status, message } => ProviderError::api(status, message),
            GitHubError::NotFound(resource) => ProviderError::not_found(resource),
            GitHubError::Http(msg) => ProviderError::network(msg),
            GitHubError::Timeout(msg) => ProviderError::timeout(msg),
            GitHubError::Deserialize(msg) => ProviderError::deserialize(msg),
        }
    }
}
