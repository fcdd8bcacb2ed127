//! Error types for the research pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Every stage degrades on failure; only [`ReportError`] on the output directory is fatal.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP layer of the search providers.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be built
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Rate limited by the provider (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Atom feed parsing error
    #[error("Failed to parse feed: {0}")]
    Feed(String),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create a feed parsing error.
    #[must_use]
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed(message.into())
    }

    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::BadRequest { .. } => Some(400),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors at a provider-adapter boundary.
///
/// The aggregator matches on the kind to decide whether a fallback applies.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The provider query itself failed (network, status, parsing).
    #[error("Query failed: {0}")]
    Query(#[from] ClientError),

    /// Author lookup produced no candidate.
    #[error("No author matches '{query}'")]
    NoAuthorMatch {
        /// Query used for the lookup
        query: String,
    },

    /// A single record could not be mapped to a paper.
    #[error("Malformed {provider} record: {reason}")]
    Malformed {
        /// Provider name
        provider: &'static str,
        /// What was wrong with the record
        reason: String,
    },
}

impl SearchError {
    /// Create a no-author-match error.
    #[must_use]
    pub fn no_author_match(query: impl Into<String>) -> Self {
        Self::NoAuthorMatch { query: query.into() }
    }

    /// Create a malformed record error.
    #[must_use]
    pub fn malformed(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed { provider, reason: reason.into() }
    }

    /// Returns true if the author-centric fallback should be attempted.
    #[must_use]
    pub const fn wants_fallback(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Errors from the text-generation backend.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 response from the backend
    #[error("Generation backend error: {status} - {body}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to parse generation response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GenerationError {
    /// Create a backend error.
    #[must_use]
    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        Self::Backend { status, body: body.into() }
    }
}

/// Errors while writing artifacts or rendering the chart.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart backend failure
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// Configured font could not be loaded
    #[error("Font {path:?} unusable: {message}")]
    Font {
        /// Font file path
        path: PathBuf,
        /// Loader message
        message: String,
    },
}

impl ReportError {
    /// Create a chart error from any displayable backend error.
    #[must_use]
    pub fn chart(err: impl std::fmt::Display) -> Self {
        Self::Chart(err.to_string())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for provider-adapter operations.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status() {
        assert_eq!(ClientError::rate_limited(60).status(), Some(429));
        assert_eq!(ClientError::not_found("paper123").status(), Some(404));
        assert_eq!(ClientError::server(503, "down").status(), Some(503));
        assert_eq!(ClientError::feed("bad xml").status(), None);
    }

    #[test]
    fn test_only_query_failures_trigger_fallback() {
        assert!(SearchError::from(ClientError::server(500, "boom")).wants_fallback());
        assert!(!SearchError::no_author_match("nobody").wants_fallback());
        assert!(!SearchError::malformed("arxiv", "missing id").wants_fallback());
    }

    #[test]
    fn test_generation_error_message_embeds_status_and_body() {
        let err = GenerationError::backend(500, "model not loaded");
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("model not loaded"));
    }
}
