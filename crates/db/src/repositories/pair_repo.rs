//! Repository for the `pairs` table, including the transactional
//! dissolution path that recomputes dancer availability.

use quickstep_core::status::recompute_after_pair_removal;
use quickstep_core::types::DbId;
use sqlx::PgPool;

use crate::models::dancer::Dancer;
use crate::models::pair::Pair;
use crate::repositories::dancer_repo::COLUMNS as DANCER_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, dancer1_id, dancer2_id, created_at";

/// Provides read operations and the dissolution transition for pairs.
///
/// There is deliberately no `create`: pairs come into existence only
/// through request acceptance (`RequestRepo::accept`).
pub struct PairRepo;

impl PairRepo {
    /// Find a pair by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pair>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pairs WHERE id = $1");
        sqlx::query_as::<_, Pair>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pairs in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pair>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pairs ORDER BY id");
        sqlx::query_as::<_, Pair>(&query).fetch_all(pool).await
    }

    /// List every pair referencing a dancer in either slot.
    pub async fn list_for_dancer(pool: &PgPool, dancer_id: DbId) -> Result<Vec<Pair>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pairs
             WHERE dancer1_id = $1 OR dancer2_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Pair>(&query)
            .bind(dancer_id)
            .fetch_all(pool)
            .await
    }

    /// Dissolve a pair and recompute both members' availability.
    ///
    /// Runs as a single transaction: the pair row and both dancer rows are
    /// locked (dancers in ascending id order), the pair is deleted, and
    /// each dancer independently returns to `IN_SEARCH` iff no other pair
    /// still references them. Returns `false` if the pair does not exist.
    pub async fn delete_and_release(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM pairs WHERE id = $1 FOR UPDATE");
        let Some(pair) = sqlx::query_as::<_, Pair>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(false);
        };

        let query = format!(
            "SELECT {DANCER_COLUMNS} FROM dancers
             WHERE id IN ($1, $2)
             ORDER BY id
             FOR UPDATE"
        );
        let dancers = sqlx::query_as::<_, Dancer>(&query)
            .bind(pair.dancer1_id)
            .bind(pair.dancer2_id)
            .fetch_all(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM pairs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for dancer in &dancers {
            let remaining: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM pairs WHERE dancer1_id = $1 OR dancer2_id = $1",
            )
            .bind(dancer.id)
            .fetch_one(&mut *tx)
            .await?;

            if let Some(new_status) = recompute_after_pair_removal(&dancer.status, remaining) {
                sqlx::query("UPDATE dancers SET status = $2, updated_at = NOW() WHERE id = $1")
                    .bind(dancer.id)
                    .bind(new_status)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        tracing::debug!(
            pair_id = id,
            dancer1_id = pair.dancer1_id,
            dancer2_id = pair.dancer2_id,
            "Pair dissolved"
        );

        Ok(true)
    }
}
