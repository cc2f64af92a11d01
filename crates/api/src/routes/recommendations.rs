//! Route definitions for the `/recommendations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
///
/// ```text
/// GET /basic/{dancer_id}     -> rule-based candidates
/// GET /knn/{dancer_id}?k=5   -> nearest-neighbor candidates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/basic/{dancer_id}", get(recommendations::basic))
        .route("/knn/{dancer_id}", get(recommendations::knn))
}
