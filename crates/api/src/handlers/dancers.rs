//! Handlers for the `/dancers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickstep_core::error::CoreError;
use quickstep_core::status::is_valid_sex;
use quickstep_core::types::DbId;
use quickstep_db::models::dancer::{CreateDancer, Dancer, UpdateDancer};
use quickstep_db::repositories::{DancerRepo, PairRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/dancers
///
/// Register a new dancer profile. Every profile starts `IN_SEARCH`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDancer>,
) -> AppResult<(StatusCode, Json<Dancer>)> {
    if !is_valid_sex(&input.sex) {
        return Err(AppError::Core(CoreError::Validation(
            "sex must be MALE or FEMALE".into(),
        )));
    }

    let dancer = DancerRepo::create(&state.pool, &input).await?;

    tracing::info!(dancer_id = dancer.id, user_id = auth.user_id, "Dancer created");

    Ok((StatusCode::CREATED, Json(dancer)))
}

/// GET /api/v1/dancers
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Dancer>>> {
    let dancers = DancerRepo::list(&state.pool).await?;
    Ok(Json(dancers))
}

/// GET /api/v1/dancers/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Dancer>> {
    let dancer = DancerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id,
        }))?;
    Ok(Json(dancer))
}

/// PUT /api/v1/dancers/{id}
///
/// Partial profile update. The DTO carries no `status` field, so
/// availability cannot be edited here -- it belongs to the pair lifecycle.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDancer>,
) -> AppResult<Json<Dancer>> {
    if !auth.caller().can_act_for_dancer(id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may update this dancer".into(),
        )));
    }
    if let Some(sex) = &input.sex {
        if !is_valid_sex(sex) {
            return Err(AppError::Core(CoreError::Validation(
                "sex must be MALE or FEMALE".into(),
            )));
        }
    }

    let dancer = DancerRepo::update_profile(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id,
        }))?;

    tracing::info!(dancer_id = id, user_id = auth.user_id, "Dancer profile updated");

    Ok(Json(dancer))
}

/// DELETE /api/v1/dancers/{id}
///
/// Remove a dancer profile. Refused while the dancer is in a pair; the
/// dancer's requests go with the profile.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !auth.caller().can_act_for_dancer(id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may delete this dancer".into(),
        )));
    }

    let pairs = PairRepo::list_for_dancer(&state.pool, id).await?;
    if !pairs.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(
            "Dancer is in an active pair; dissolve the pair first".into(),
        )));
    }

    let deleted = DancerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id,
        }));
    }

    tracing::info!(dancer_id = id, user_id = auth.user_id, "Dancer deleted");

    Ok(StatusCode::NO_CONTENT)
}
