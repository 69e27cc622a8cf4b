//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceHubError`] via `From`.

use std::time::Duration;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHubError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A request or entity that breaks a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("city must not be empty")]
    EmptyCity,

    #[error("pageNumber must be at least 1, got {0}")]
    PageNumberOutOfRange(i64),

    #[error("pageSize must be at least 1, got {0}")]
    PageSizeOutOfRange(i64),

    #[error("page window starting at page {page_number} with size {page_size} is too large")]
    OffsetOverflow { page_number: i64, page_size: i64 },

    #[error("{0}")]
    MalformedRequest(String),
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A storage call did not complete within its deadline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} timed out after {}ms", .after.as_millis())]
pub struct TimeoutError {
    pub operation: &'static str,
    pub after: Duration,
}
