//! GitLab API error types.

use thiserror::Error;

use crate::http::HttpError;
use crate::platform::ProviderError;

/// Errors that can occur when interacting with the GitLab API.
#[derive(Debug, Error)]
pub enum GitLabError {
    #[error("GitLab API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("GitLab user not found: {0}")]
    UserNotFound(String),

    #[error("GitLab resource not found: {0}")]
    NotFound(String),

    #[error("HTTP request error: {0}")]
    Http(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("JSON deserialization error: {0}")]
    Deserialize(String),
}

impl GitLabError {
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

impl From<HttpError> for GitLabError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => Self::Timeout(msg),
            other => Self::Http(other.to_string()),
        }
    }
}

impl From<GitLabError> for ProviderError {
    fn from(err: GitLabError) -> Self {
        match err {
            GitLabError::Api { status, message } => ProviderError::api(status, message),
            GitLabError::UserNotFound(user) => ProviderError::not_found(format!("user: {user}")),
            GitLabError::NotFound(resource) => ProviderError::not_found(resource),
            GitLabError::Http(msg) => ProviderError::network(msg),
            GitLabError::Timeout(msg) => ProviderError::timeout(msg),
            GitLabError::Deserialize(msg) => ProviderError::deserialize(msg),
        }
    }
}
