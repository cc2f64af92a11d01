//! Route definitions for the `/requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (sender's account or admin)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> resolve (accept forms the pair atomically)
/// DELETE /{id}  -> delete (participant or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list).post(requests::create))
        .route(
            "/{id}",
            get(requests::get_by_id)
                .put(requests::resolve)
                .delete(requests::delete),
        )
}
