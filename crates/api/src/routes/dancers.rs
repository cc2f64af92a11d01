//! Route definitions for the `/dancers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dancers;
use crate::state::AppState;

/// Routes mounted at `/dancers`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (owner or admin)
/// DELETE /{id}  -> delete (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dancers::list).post(dancers::create))
        .route(
            "/{id}",
            get(dancers::get_by_id)
                .put(dancers::update)
                .delete(dancers::delete),
        )
}
