//! Bitbucket API error types.

use thiserror::Error;

use crate::http::HttpError;
use crate::platform::ProviderError;

/// Errors that can occur when interacting with the Bitbucket API.
#[derive(Debug, Error)]
pub enum BitbucketError {
    #[error("Bitbucket API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Bitbucket resource not found: {0}")]
    NotFound(String),

    #[error("HTTP request error: {0}")]
    Http(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("JSON deserialization error: {0}")]
    Deserialize(String),
}

impl BitbucketError {
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

impl From<HttpError> for BitbucketError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => Self::Timeout(msg),
            other => Self::Http(other.to_string()),
        }
    }
}

impl From<BitbucketError> for ProviderError {
    fn from(err: BitbucketError) -> Self {
        match err {
            BitbucketError::Api { status, message } => ProviderError::api(status, message),
            BitbucketError::NotFound(resource) => ProviderError::not_found(resource),
            BitbucketError::Http(msg) => ProviderError::network(msg),
            BitbucketError::Timeout(msg) => ProviderError::timeout(msg),
            BitbucketError::Deserialize(msg) => ProviderError::deserialize(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_classifies_404_as_not_found() {
        let err = BitbucketError::from_status(404, "{}", "workspace: ghost");
        assert!(matches!(err, BitbucketError::NotFound(_)));

        let err = BitbucketError::from_status(500, "oops", "workspace: ghost");
        assert!(matches!(err, BitbucketError::Api { status: 500, .. }));
    }

    #[test]
    fn provider_error_conversion_keeps_the_kind() {
        let not_found: ProviderError =
            BitbucketError::NotFound("workspace: ghost".to_string()).into();
        assert!(not_found.is_not_found());

        let timeout: ProviderError = BitbucketError::Timeout("10s elapsed".to_string()).into();
        assert!(matches!(timeout, ProviderError::Timeout { .. }));
    }
}
