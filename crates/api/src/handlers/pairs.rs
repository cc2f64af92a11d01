//! Handlers for the `/pairs` resource: read projections and dissolution.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickstep_core::error::CoreError;
use quickstep_core::types::DbId;
use quickstep_db::models::pair::{Pair, PairResponse};
use quickstep_db::repositories::{DancerRepo, PairRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Join a pair row with its two full dancer records.
async fn to_response(state: &AppState, pair: Pair) -> AppResult<PairResponse> {
    let dancer1 = DancerRepo::find_by_id(&state.pool, pair.dancer1_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: pair.dancer1_id,
        }))?;
    let dancer2 = DancerRepo::find_by_id(&state.pool, pair.dancer2_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: pair.dancer2_id,
        }))?;

    Ok(PairResponse {
        id: pair.id,
        dancer1,
        dancer2,
        created_at: pair.created_at,
    })
}

/// GET /api/v1/pairs
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PairResponse>>> {
    let pairs = PairRepo::list(&state.pool).await?;

    let mut responses = Vec::with_capacity(pairs.len());
    for pair in pairs {
        responses.push(to_response(&state, pair).await?);
    }

    Ok(Json(responses))
}

/// GET /api/v1/pairs/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PairResponse>> {
    let pair = PairRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pair", id }))?;

    Ok(Json(to_response(&state, pair).await?))
}

/// DELETE /api/v1/pairs/{id}
///
/// Dissolve a partnership. Admins always; a dancer only for a pair they
/// belong to. Both members' availability is recomputed in the same
/// transaction as the delete.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let pair = PairRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pair", id }))?;

    if !auth.caller().can_modify_pair(pair.dancer1_id, pair.dancer2_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only a member or an admin may dissolve this pair".into(),
        )));
    }

    let deleted = PairRepo::delete_and_release(&state.pool, id).await?;
    if !deleted {
        // Lost a race with another delete.
        return Err(AppError::Core(CoreError::NotFound { entity: "Pair", id }));
    }

    tracing::info!(pair_id = id, user_id = auth.user_id, "Pair dissolved");

    Ok(StatusCode::NO_CONTENT)
}
