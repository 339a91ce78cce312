//! Statements shared by every soft-deletable table
//!
//! Table and column names are always compile-time constants.

use sqlx::PgPool;

/// Soft delete a live row, returning whether one was hit
pub async fn soft_delete(pool: &PgPool, table: &'static str, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "UPDATE {table} SET deleted_at = NOW(), modified_at = NOW() \
         WHERE id = $1 AND deleted_at IS NULL"
    );
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Set a boolean column on a live row, returning whether one was hit
pub async fn set_flag(
    pool: &PgPool,
    table: &'static str,
    column: &'static str,
    id: i64,
    value: bool,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "UPDATE {table} SET {column} = $2, modified_at = NOW() \
         WHERE id = $1 AND deleted_at IS NULL"
    );
    let result = sqlx::query(&sql).bind(id).bind(value).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Whether a live row other than `exclude_id` carries exactly `value` in `column`
pub async fn value_taken(
    pool: &PgPool,
    table: &'static str,
    column: &'static str,
    value: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {table} \
         WHERE {column} = $1 AND deleted_at IS NULL AND ($2::BIGINT IS NULL OR id <> $2))"
    );
    sqlx::query_scalar::<_, bool>(&sql)
        .bind(value)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
}
