//! Route definitions for the `/auth` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /signup      -> signup
/// POST   /login       -> login
/// POST   /refresh     -> refresh
/// POST   /logout      -> logout (requires auth)
/// DELETE /users/{id}  -> delete_user (admin or self)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/users/{id}", delete(auth::delete_user))
}
