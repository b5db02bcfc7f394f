//! Error types for the persistence layer.

use statecraft_entity::EntityError;
use statecraft_types::ChildKey;
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors that can occur in persistence operations.
///
/// Backend outcomes propagate through the controller unchanged — a
/// [`PersistError::ConcurrencyConflict`] is never collapsed into a generic
/// failure, so callers can distinguish it for user-level resolution.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The presented token does not match the stored version. Resolve by
    /// reloading and reapplying; never auto-retried.
    #[error("concurrency conflict for {0}: stored version does not match the presented token")]
    ConcurrencyConflict(ChildKey),

    /// The addressed child does not exist in the backend.
    #[error("child not found: {0}")]
    NotFound(ChildKey),

    /// Precondition violation: the entity's lifecycle state does not admit
    /// the attempted operation. A programming defect, not retried.
    #[error("invalid entity state: {0}")]
    InvalidState(String),

    /// Failure raised by the entity layer (authorization, unknown
    /// property), forwarded as-is.
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Any other backend failure.
    #[error("backend error: {0}")]
    Backend(String),
}
