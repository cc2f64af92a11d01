//! Route definitions for the `/pairs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pairs;
use crate::state::AppState;

/// Routes mounted at `/pairs`.
///
/// ```text
/// GET    /      -> list
/// GET    /{id}  -> get_by_id
/// DELETE /{id}  -> delete (member or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pairs::list))
        .route("/{id}", get(pairs::get_by_id).delete(pairs::delete))
}
