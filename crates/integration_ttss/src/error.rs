//! TTSS error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to the tracking service
#[derive(Debug, Error)]
pub enum TtssError {
    /// Connection to the tracking service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The service answered with a non-success status that is not treated as "not found"
    #[error("HTTP {status} from {url}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Failed to extract domain records from a response
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Operation the service exposes but this client does not support
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TtssError {
    /// Returns true if repeating the same request may succeed
    ///
    /// The client itself never retries; this is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::Transport { status, .. } => *status == 429 || *status >= 500,
            Self::Parse(_) | Self::NotImplemented(_) | Self::Configuration(_) => false,
        }
    }
}

/// Errors raised while extracting records from a response payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed JSON, a value of the wrong type, or a missing required key
    #[error("invalid JSON payload: {0}")]
    Json(String),

    /// Passage status outside the closed set
    #[error("unknown passage status: {0}")]
    UnknownStatus(String),

    /// Clock time not in `HH:MM` form
    #[error("invalid clock time: {0:?}")]
    InvalidTime(String),

    /// Malformed HTML fragment
    #[error("invalid HTML fragment: {0}")]
    Html(String),

    /// Full-text lookup result carrying neither a stop nor a stop point key
    #[error("lookup result has neither a stop nor a stop point identifier")]
    MissingDiscriminant,

    /// Stop sequence number that is neither an integer nor a numeric string
    #[error("invalid stop sequence number: {0}")]
    InvalidSequenceNumber(String),

    /// Relative passage time that puts the passage outside the representable range
    #[error("relative passage time out of range: {0} s")]
    InvalidRelativeTime(i64),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<DomainError> for ParseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPassageStatus(status) => Self::UnknownStatus(status),
            DomainError::InvalidBoundingBox(message) => Self::Json(message),
        }
    }
}
