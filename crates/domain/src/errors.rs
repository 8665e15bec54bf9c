//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Passage status string outside the closed set the service uses
    #[error("Invalid passage status: {0}")]
    InvalidPassageStatus(String),

    /// Bounding box with an inverted, non-finite or off-globe edge
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),
}
