//! Partnership request model and DTOs.

use quickstep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full request row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    /// `PENDING`, `ACCEPTED`, or `REJECTED`. Resolved at most once.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new request. Status always starts as `PENDING`.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub sender_id: DbId,
    pub receiver_id: DbId,
}

/// DTO for resolving a request.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub status: String,
}
