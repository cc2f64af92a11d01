//! Domain error taxonomy shared by every layer above this crate.
//!
//! The API layer translates these kinds to HTTP statuses; nothing in the
//! core swallows one.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity id does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A business-rule precondition failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness or dependency constraint would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller's credential is missing, invalid, or expired.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but lacks rights for the target entity.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
