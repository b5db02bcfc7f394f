//! Error types for the entity layer.

use statecraft_rules::AuthorizationAction;
use thiserror::Error;

/// Result type for entity operations.
pub type EntityResult<T> = Result<T, EntityError>;

/// Errors that can occur on governed entity operations.
#[derive(Debug, Error)]
pub enum EntityError {
    /// The current principal lacks the role an authorization rule requires.
    #[error("authorization denied: {action} on {target}")]
    AuthorizationDenied {
        action: AuthorizationAction,
        target: String,
    },

    /// Operation attempted in an incompatible lifecycle state. A
    /// programming defect, not user-recoverable.
    #[error("invalid entity state: {0}")]
    InvalidState(String),

    /// The entity model does not declare the named property.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
}
