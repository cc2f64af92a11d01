//! Repository for the `dancers` table.

use quickstep_core::types::DbId;
use sqlx::PgPool;

use crate::models::dancer::{CreateDancer, Dancer, UpdateDancer};

/// Column list shared across queries to avoid repetition. Also used by the
/// lifecycle transactions that lock dancer rows.
pub(crate) const COLUMNS: &str =
    "id, name, secret_name, sex, age, height, style, level, status, created_at, updated_at";

/// Provides CRUD operations and candidate scans for dancers.
pub struct DancerRepo;

impl DancerRepo {
    /// Insert a new dancer, returning the created row.
    ///
    /// The schema default puts every new dancer `IN_SEARCH`.
    pub async fn create(pool: &PgPool, input: &CreateDancer) -> Result<Dancer, sqlx::Error> {
        let query = format!(
            "INSERT INTO dancers (name, secret_name, sex, age, height, style, level)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dancer>(&query)
            .bind(&input.name)
            .bind(&input.secret_name)
            .bind(&input.sex)
            .bind(input.age)
            .bind(input.height)
            .bind(&input.style)
            .bind(&input.level)
            .fetch_one(pool)
            .await
    }

    /// Find a dancer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dancers WHERE id = $1");
        sqlx::query_as::<_, Dancer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all dancers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dancers ORDER BY id");
        sqlx::query_as::<_, Dancer>(&query).fetch_all(pool).await
    }

    /// Update a dancer's profile. Only non-`None` fields in `input` are
    /// applied. The statement never references `status`: availability is
    /// owned by the pair lifecycle.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDancer,
    ) -> Result<Option<Dancer>, sqlx::Error> {
        let query = format!(
            "UPDATE dancers SET
                name = COALESCE($2, name),
                secret_name = COALESCE($3, secret_name),
                sex = COALESCE($4, sex),
                age = COALESCE($5, age),
                height = COALESCE($6, height),
                style = COALESCE($7, style),
                level = COALESCE($8, level),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dancer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.secret_name)
            .bind(&input.sex)
            .bind(input.age)
            .bind(input.height)
            .bind(&input.style)
            .bind(&input.level)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dancer. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any pair references the
    /// dancer; the dancer's requests are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dancers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Scan for recommendation candidates: dancers other than `dancer_id`
    /// who are available, of the opposite sex, and dance the same style.
    ///
    /// `IS NOT DISTINCT FROM` makes two unset styles count as a match.
    /// Results come back in insertion order; level filtering is applied by
    /// the caller through the core rules.
    pub async fn list_compatible(
        pool: &PgPool,
        dancer_id: DbId,
        sex: &str,
        style: Option<&str>,
    ) -> Result<Vec<Dancer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dancers
             WHERE id <> $1
               AND sex <> $2
               AND status = 'IN_SEARCH'
               AND style IS NOT DISTINCT FROM $3
             ORDER BY id"
        );
        sqlx::query_as::<_, Dancer>(&query)
            .bind(dancer_id)
            .bind(sex)
            .bind(style)
            .fetch_all(pool)
            .await
    }
}
