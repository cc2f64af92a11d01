//! Route composition.

pub mod auth;
pub mod dancers;
pub mod health;
pub mod pairs;
pub mod recommendations;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                         register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/users/{id}                     delete account (admin or self)
///
/// /dancers                             list, create
/// /dancers/{id}                        get, update, delete
///
/// /requests                            list, create
/// /requests/{id}                       get, resolve, delete
///
/// /pairs                               list
/// /pairs/{id}                          get, dissolve
///
/// /recommendations/basic/{dancer_id}   rule-based candidates
/// /recommendations/knn/{dancer_id}     nearest-neighbor candidates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dancers", dancers::router())
        .nest("/requests", requests::router())
        .nest("/pairs", pairs::router())
        .nest("/recommendations", recommendations::router())
}
