//! Provider error types.

use thiserror::Error;

/// Broad failure category of a provider call.
///
/// Boundary layers map these to transport-specific responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The repository does not exist or is not visible.
    NotFound,
    /// Credentials were missing, invalid or insufficient.
    AuthFailed,
    /// The remote API refused the call because of rate limiting.
    RateLimited,
    /// The remote API could not be reached.
    Network,
    /// Anything else.
    Other,
}

/// Provider-related errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No registered provider handles the URL.
    #[error(
        "unsupported repository URL: {0}. Currently only GitHub repositories are supported"
    )]
    Unsupported(String),

    /// The URL names a supported host but not a repository.
    #[error(
        "invalid GitHub repository URL: {0}. Expected format: https://github.com/{{owner}}/{{repo}}"
    )]
    InvalidUrl(String),

    /// Repository not found.
    #[error("repository not found or inaccessible: {0}")]
    NotFound(String),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Authenticated, but not allowed to read the repository.
    #[error("insufficient permissions: {0}")]
    Forbidden(String),

    /// Rate limit exceeded.
    #[error("API rate limit exceeded")]
    RateLimited,

    /// Transport failure (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected API status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ProviderError {
    /// Returns the failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AuthFailed(_) | Self::Forbidden(_) => ErrorKind::AuthFailed,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::Network(_) => ErrorKind::Network,
            Self::Unsupported(_)
            | Self::InvalidUrl(_)
            | Self::Api { .. }
            | Self::InvalidResponse(_)
            | Self::Client(_) => ErrorKind::Other,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
