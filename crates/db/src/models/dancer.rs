//! Dancer entity model and DTOs.

use quickstep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full dancer row from the `dancers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dancer {
    pub id: DbId,
    pub name: String,
    /// Private display alias, shown only to matched partners.
    pub secret_name: String,
    pub sex: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub style: Option<String>,
    /// Rank code on the N..S ladder; free-form at the storage level.
    pub level: Option<String>,
    /// Availability, `IN_SEARCH` or `IN_PAIR`. Derived from pair
    /// membership -- written only by the pair lifecycle.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new dancer. Status always starts as `IN_SEARCH`.
#[derive(Debug, Deserialize)]
pub struct CreateDancer {
    pub name: String,
    pub secret_name: String,
    pub sex: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub style: Option<String>,
    pub level: Option<String>,
}

/// DTO for updating a dancer profile. All fields are optional.
///
/// Deliberately has no `status` field: availability is not a profile
/// attribute and cannot be edited through this path.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDancer {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub style: Option<String>,
    pub level: Option<String>,
}
