//! Rating submission -- the only write path in the service.

use sqlx::SqlitePool;

use crate::db::schema::{RATING_STAR_COLUMN, RATINGS_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::{Rating, MAX_STARS, MIN_STARS};

/// Upsert a star rating for (user_id, show_id), returning the stored row.
///
/// A single `INSERT ... ON CONFLICT DO UPDATE ... RETURNING` keeps the
/// operation atomic: concurrent submissions for the same pair can never
/// produce a second row, and retrying an identical submission is a no-op.
/// Out-of-range stars are rejected before anything touches the database.
pub async fn submit(
    pool: &SqlitePool,
    user_id: i64,
    show_id: &str,
    star_rating: i64,
) -> AppResult<Rating> {
    if !(MIN_STARS..=MAX_STARS).contains(&star_rating) {
        return Err(AppError::InvalidInput(format!(
            "rating must be between {} and {}, got {}",
            MIN_STARS, MAX_STARS, star_rating
        )));
    }

    let sql = format!(
        "INSERT INTO {table} (user_id, show_id, {col}) VALUES (?, ?, ?) \
         ON CONFLICT(user_id, show_id) DO UPDATE SET {col} = excluded.{col} \
         RETURNING user_id, show_id, {col}",
        table = RATINGS_TABLE,
        col = RATING_STAR_COLUMN,
    );
    let stored: Rating = sqlx::query_as(&sql)
        .bind(user_id)
        .bind(show_id)
        .bind(star_rating)
        .fetch_one(pool)
        .await?;

    tracing::info!(user_id, show_id, star_rating, "rating upserted");
    Ok(stored)
}
