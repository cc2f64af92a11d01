//! Repository for the `requests` table, including the transactional
//! acceptance path that forms a pair.

use quickstep_core::matching::{validate_pair_formation, PairCandidate, PairViolation};
use quickstep_core::status::{REQUEST_ACCEPTED, REQUEST_PENDING, REQUEST_REJECTED, STATUS_IN_PAIR};
use quickstep_core::types::DbId;
use sqlx::PgPool;

use crate::models::dancer::Dancer;
use crate::models::request::{CreateRequest, Request};
use crate::repositories::dancer_repo::COLUMNS as DANCER_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sender_id, receiver_id, status, created_at";

/// Result of attempting to accept a request.
///
/// Domain violations are data, not errors, so the transactional method can
/// keep `sqlx::Error` for genuine store failures; the API layer maps
/// violations onto the validation error kind.
#[derive(Debug)]
pub enum AcceptOutcome {
    /// The pair was formed and the request marked `ACCEPTED`.
    Accepted(Request),
    /// A pair-formation precondition failed; nothing was written.
    Violation(PairViolation),
    /// The request was already resolved; nothing was written.
    AlreadyResolved,
    /// No request with the given id exists.
    NotFound,
}

/// Result of rejecting a request.
#[derive(Debug)]
pub enum ResolveOutcome {
    Resolved(Request),
    AlreadyResolved,
    NotFound,
}

/// Provides CRUD operations and lifecycle transitions for requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request, returning the created row.
    ///
    /// The schema default puts every new request in `PENDING`. Duplicate
    /// sender/receiver combinations are allowed.
    pub async fn create(pool: &PgPool, input: &CreateRequest) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (sender_id, receiver_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.sender_id)
            .bind(input.receiver_id)
            .fetch_one(pool)
            .await
    }

    /// Find a request by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests ORDER BY id");
        sqlx::query_as::<_, Request>(&query).fetch_all(pool).await
    }

    /// Delete a request. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a pending request `REJECTED`.
    ///
    /// The guard on the current status makes resolution one-shot: a request
    /// that was already accepted or rejected is left untouched.
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<ResolveOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET status = $2 WHERE id = $1 AND status = $3 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(REQUEST_REJECTED)
            .bind(REQUEST_PENDING)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(request) => Ok(ResolveOutcome::Resolved(request)),
            None => match Self::find_by_id(pool, id).await? {
                Some(_) => Ok(ResolveOutcome::AlreadyResolved),
                None => Ok(ResolveOutcome::NotFound),
            },
        }
    }

    /// Accept a pending request, forming a pair.
    ///
    /// Runs as a single transaction: the request row and both dancer rows
    /// are locked (`FOR UPDATE`, dancers in ascending id order so
    /// overlapping accepts serialize without deadlock), the pair-formation
    /// rules are evaluated against the locked state, and on success the
    /// pair insert, both status writes, and the request update commit
    /// together. Any violation rolls everything back.
    pub async fn accept(pool: &PgPool, id: DbId) -> Result<AcceptOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1 FOR UPDATE");
        let Some(request) = sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(AcceptOutcome::NotFound);
        };
        if request.status != REQUEST_PENDING {
            return Ok(AcceptOutcome::AlreadyResolved);
        }

        let query = format!(
            "SELECT {DANCER_COLUMNS} FROM dancers
             WHERE id IN ($1, $2)
             ORDER BY id
             FOR UPDATE"
        );
        let dancers = sqlx::query_as::<_, Dancer>(&query)
            .bind(request.sender_id)
            .bind(request.receiver_id)
            .fetch_all(&mut *tx)
            .await?;
        let sender = dancers
            .iter()
            .find(|d| d.id == request.sender_id)
            .ok_or(sqlx::Error::RowNotFound)?;
        let receiver = dancers
            .iter()
            .find(|d| d.id == request.receiver_id)
            .ok_or(sqlx::Error::RowNotFound)?;

        let paired: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pairs
             WHERE dancer1_id IN ($1, $2) OR dancer2_id IN ($1, $2)",
        )
        .bind(request.sender_id)
        .bind(request.receiver_id)
        .fetch_one(&mut *tx)
        .await?;

        let as_candidate = |d: &Dancer| PairCandidate {
            id: d.id,
            sex: d.sex.clone(),
            status: d.status.clone(),
        };
        if let Err(violation) =
            validate_pair_formation(&as_candidate(sender), &as_candidate(receiver), paired > 0)
        {
            tx.rollback().await?;
            return Ok(AcceptOutcome::Violation(violation));
        }

        sqlx::query("INSERT INTO pairs (dancer1_id, dancer2_id) VALUES ($1, $2)")
            .bind(request.sender_id)
            .bind(request.receiver_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE dancers SET status = $3, updated_at = NOW() WHERE id IN ($1, $2)")
            .bind(request.sender_id)
            .bind(request.receiver_id)
            .bind(STATUS_IN_PAIR)
            .execute(&mut *tx)
            .await?;

        let query = format!("UPDATE requests SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let updated = sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(REQUEST_ACCEPTED)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            request_id = id,
            sender_id = request.sender_id,
            receiver_id = request.receiver_id,
            "Request accepted, pair formed"
        );

        Ok(AcceptOutcome::Accepted(updated))
    }
}
