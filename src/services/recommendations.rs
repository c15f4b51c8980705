//! Reads over the two precomputed recommendation tables.
//!
//! Both tables are keyless snapshots rewritten wholesale by an external
//! batch job; this module only ever reads whatever the last completed
//! refresh left behind.

use std::collections::BTreeMap;

use sqlx::{Row, SqlitePool};

use crate::db::schema::{HOMEPAGE_RECS_TABLE, USER_RECS_TABLE};
use crate::error::AppResult;
use crate::models::{HomeRecommendation, RelatedRecommendation};

/// A user's home-page rails: genre -> entries in non-increasing score order.
pub async fn home_page(
    pool: &SqlitePool,
    user_id: i64,
) -> AppResult<BTreeMap<String, Vec<HomeRecommendation>>> {
    let sql = format!(
        "SELECT genre, show_id, title, score FROM {} WHERE user_id = ? ORDER BY genre, score DESC",
        HOMEPAGE_RECS_TABLE,
    );
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;

    let mut rails: BTreeMap<String, Vec<HomeRecommendation>> = BTreeMap::new();
    for row in rows {
        let genre: String = row.try_get("genre")?;
        rails.entry(genre).or_default().push(HomeRecommendation {
            show_id: row.try_get("show_id")?,
            title: row.try_get("title")?,
            score: row.try_get("score")?,
        });
    }
    Ok(rails)
}

/// "Also liked" entries scoped by a source title, best score first. An
/// unknown source yields an empty list.
pub async fn related(
    pool: &SqlitePool,
    source_show_id: &str,
) -> AppResult<Vec<RelatedRecommendation>> {
    let sql = format!(
        "SELECT source_show_id, show_id, title, score FROM {} WHERE source_show_id = ? ORDER BY score DESC",
        USER_RECS_TABLE,
    );
    let entries = sqlx::query_as(&sql)
        .bind(source_show_id)
        .fetch_all(pool)
        .await?;
    Ok(entries)
}
