use thiserror::Error;

/// Errors that can occur when querying a hosting platform.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-2xx API response other than 404.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The platform reports the resource does not exist.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The bounded per-request timeout elapsed.
    #[error("Timed out: {message}")]
    Timeout { message: String },

    /// The response body did not match the expected JSON shape.
    #[error("Unexpected response shape: {message}")]
    Deserialize { message: String },
}

impl ProviderError {
    /// Create an API error.
    #[inline]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a timeout error.
    #[inline]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a deserialization error.
    #[inline]
    pub fn deserialize(message: impl Into<String>) -> Self {
        Self::Deserialize {
            message: message.into(),
        }
    }

    /// Check if this error means the resource does not exist, as opposed to
    /// an operational failure.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extract a short error message suitable for a single log line.
///
/// Takes the first line of the rendered error, which matters for errors that
/// embed multi-line upstream response bodies.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
