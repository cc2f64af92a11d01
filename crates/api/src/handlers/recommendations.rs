//! Handlers for the `/recommendations` resource.
//!
//! Both endpoints are read-only projections over the current dancer pool;
//! the math lives in `quickstep_core::recommend`.

use axum::extract::{Path, Query, State};
use axum::Json;
use quickstep_core::error::CoreError;
use quickstep_core::recommend::{
    knn_rank, level_compatible, level_ordinal, FeatureVector, DEFAULT_K, MAX_K, MIN_K,
};
use quickstep_core::types::DbId;
use quickstep_db::models::dancer::Dancer;
use quickstep_db::repositories::DancerRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the KNN endpoint.
#[derive(Debug, Deserialize)]
pub struct KnnParams {
    pub k: Option<usize>,
}

/// Fetch the rule-based candidate list for a dancer: opposite sex, both
/// available, same style, level within one rank.
async fn basic_candidates(state: &AppState, dancer: &Dancer) -> AppResult<Vec<Dancer>> {
    let eligible =
        DancerRepo::list_compatible(&state.pool, dancer.id, &dancer.sex, dancer.style.as_deref())
            .await?;

    let own_level = level_ordinal(dancer.level.as_deref());
    Ok(eligible
        .into_iter()
        .filter(|candidate| {
            level_compatible(own_level, level_ordinal(candidate.level.as_deref()))
        })
        .collect())
}

/// GET /api/v1/recommendations/basic/{dancer_id}
pub async fn basic(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(dancer_id): Path<DbId>,
) -> AppResult<Json<Vec<Dancer>>> {
    let dancer = DancerRepo::find_by_id(&state.pool, dancer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: dancer_id,
        }))?;

    let candidates = basic_candidates(&state, &dancer).await?;
    Ok(Json(candidates))
}

/// GET /api/v1/recommendations/knn/{dancer_id}?k=5
///
/// Refines the rule-based candidates by Euclidean distance over
/// `[level, age, height]`, normalized against the candidate population.
pub async fn knn(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(dancer_id): Path<DbId>,
    Query(params): Query<KnnParams>,
) -> AppResult<Json<Vec<Dancer>>> {
    let k = params.k.unwrap_or(DEFAULT_K);
    if !(MIN_K..=MAX_K).contains(&k) {
        return Err(AppError::BadRequest(format!(
            "k must be between {MIN_K} and {MAX_K}"
        )));
    }

    let dancer = DancerRepo::find_by_id(&state.pool, dancer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dancer",
            id: dancer_id,
        }))?;

    let (Some(age), Some(height)) = (dancer.age, dancer.height) else {
        return Err(AppError::Core(CoreError::Validation(
            "Age and height are required for KNN recommendations".into(),
        )));
    };

    // Keep only candidates with a complete feature set.
    let mut candidates: Vec<Dancer> = Vec::new();
    let mut features: Vec<FeatureVector> = Vec::new();
    for candidate in basic_candidates(&state, &dancer).await? {
        let (Some(c_age), Some(c_height)) = (candidate.age, candidate.height) else {
            continue;
        };
        if candidate.level.is_none() {
            continue;
        }
        let ordinal = level_ordinal(candidate.level.as_deref());
        features.push([f64::from(ordinal), f64::from(c_age), c_height]);
        candidates.push(candidate);
    }

    if candidates.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let query = [
        f64::from(level_ordinal(dancer.level.as_deref())),
        f64::from(age),
        height,
    ];

    let order = knn_rank(query, &features, k);
    let mut candidates: Vec<Option<Dancer>> = candidates.into_iter().map(Some).collect();
    let nearest: Vec<Dancer> = order
        .into_iter()
        .filter_map(|i| candidates[i].take())
        .collect();

    Ok(Json(nearest))
}
