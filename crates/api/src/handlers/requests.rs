//! Handlers for the `/requests` resource: the request lifecycle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quickstep_core::error::CoreError;
use quickstep_core::status::{is_resolution_status, REQUEST_ACCEPTED};
use quickstep_core::types::DbId;
use quickstep_db::models::request::{CreateRequest, Request, ResolveRequest};
use quickstep_db::repositories::{AcceptOutcome, DancerRepo, RequestRepo, ResolveOutcome};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/requests
///
/// Create a partnership proposal. Only an admin or the sender's own
/// account may create on the sender's behalf.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<Request>)> {
    let sender = DancerRepo::find_by_id(&state.pool, input.sender_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: input.sender_id,
        }))?;

    if !auth.caller().can_act_for_dancer(sender.id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Requests can only be sent on behalf of your own dancer profile".into(),
        )));
    }

    DancerRepo::find_by_id(&state.pool, input.receiver_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: input.receiver_id,
        }))?;

    let request = RequestRepo::create(&state.pool, &input).await?;

    tracing::info!(
        request_id = request.id,
        sender_id = request.sender_id,
        receiver_id = request.receiver_id,
        "Request created"
    );

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/v1/requests
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Request>>> {
    let requests = RequestRepo::list(&state.pool).await?;
    Ok(Json(requests))
}

/// GET /api/v1/requests/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Request>> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;
    Ok(Json(request))
}

/// PUT /api/v1/requests/{id}
///
/// Resolve a pending request. Rejection commits unconditionally; acceptance
/// forms a pair atomically with both status flips, or fails with the
/// specific precondition that did not hold.
pub async fn resolve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ResolveRequest>,
) -> AppResult<Json<Request>> {
    if !is_resolution_status(&input.status) {
        return Err(AppError::Core(CoreError::Validation(
            "status must be ACCEPTED or REJECTED".into(),
        )));
    }

    let request = if input.status == REQUEST_ACCEPTED {
        match RequestRepo::accept(&state.pool, id).await? {
            AcceptOutcome::Accepted(request) => request,
            AcceptOutcome::Violation(violation) => {
                return Err(AppError::Core(CoreError::Validation(violation.to_string())));
            }
            AcceptOutcome::AlreadyResolved => {
                return Err(AppError::Core(CoreError::Validation(
                    "Request has already been resolved".into(),
                )));
            }
            AcceptOutcome::NotFound => {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Request",
                    id,
                }));
            }
        }
    } else {
        match RequestRepo::reject(&state.pool, id).await? {
            ResolveOutcome::Resolved(request) => request,
            ResolveOutcome::AlreadyResolved => {
                return Err(AppError::Core(CoreError::Validation(
                    "Request has already been resolved".into(),
                )));
            }
            ResolveOutcome::NotFound => {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Request",
                    id,
                }));
            }
        }
    };

    tracing::info!(
        request_id = id,
        status = %request.status,
        user_id = auth.user_id,
        "Request resolved"
    );

    Ok(Json(request))
}

/// DELETE /api/v1/requests/{id}
///
/// Admins may delete any request; a dancer may delete requests they sent
/// or received.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let request = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;

    if !auth
        .caller()
        .can_modify_request(request.sender_id, request.receiver_id)
    {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only a participant or an admin may delete this request".into(),
        )));
    }

    RequestRepo::delete(&state.pool, id).await?;

    tracing::info!(request_id = id, user_id = auth.user_id, "Request deleted");

    Ok(StatusCode::NO_CONTENT)
}
