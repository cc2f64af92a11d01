//! Pair model and the joined response shape.

use quickstep_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::dancer::Dancer;

/// Full pair row from the `pairs` table.
///
/// Rows exist only while the partnership is active; dissolution deletes
/// the row and recomputes both dancers' status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pair {
    pub id: DbId,
    pub dancer1_id: DbId,
    pub dancer2_id: DbId,
    pub created_at: Timestamp,
}

/// A pair joined with its two full dancer records, for read endpoints.
#[derive(Debug, Serialize)]
pub struct PairResponse {
    pub id: DbId,
    pub dancer1: Dancer,
    pub dancer2: Dancer,
    pub created_at: Timestamp,
}
