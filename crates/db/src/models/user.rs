//! User account model and DTOs.

use quickstep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// `ADMIN` or `DANCER`.
    pub user_type: String,
    /// The dancer profile this account acts for, if linked.
    pub dancer_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub dancer_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            user_type: user.user_type,
            dancer_id: user.dancer_id,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user row. The password is hashed by the caller.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub dancer_id: Option<DbId>,
}
