//! Read-side queries over the catalog titles and users.

use std::collections::BTreeMap;

use sqlx::{Row, SqlitePool};

use crate::db::schema::{self, GENRE_COLUMNS, SUBSCRIPTION_COLUMNS, TITLES_TABLE, USERS_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::{Title, TitleSummary, UserProfile};

/// Fetch every genre rail: one entry per genre flag column, keyed by the
/// literal stored label, titles ordered by name. Rails with no flagged
/// titles come back as empty arrays rather than being dropped, so clients
/// can match against the full label set.
pub async fn titles_by_genre(
    pool: &SqlitePool,
) -> AppResult<BTreeMap<String, Vec<TitleSummary>>> {
    let mut rails = BTreeMap::new();
    for column in GENRE_COLUMNS {
        let sql = format!(
            "SELECT show_id, title, release_year, country FROM {} WHERE {} = 1 ORDER BY title",
            TITLES_TABLE,
            schema::quote_ident(column.label),
        );
        let titles: Vec<TitleSummary> = sqlx::query_as(&sql).fetch_all(pool).await?;
        rails.insert(column.label.to_string(), titles);
    }
    Ok(rails)
}

/// Titles carrying a single genre flag, matched case- and
/// punctuation-insensitively. An unknown genre yields an empty list, never
/// an error.
pub async fn titles_for_genre(pool: &SqlitePool, genre: &str) -> AppResult<Vec<TitleSummary>> {
    let Some(column) = schema::genre_by_name(genre) else {
        return Ok(Vec::new());
    };

    let sql = format!(
        "SELECT show_id, title, release_year, country FROM {} WHERE {} = 1 ORDER BY title",
        TITLES_TABLE,
        schema::quote_ident(column.label),
    );
    let titles = sqlx::query_as(&sql).fetch_all(pool).await?;
    Ok(titles)
}

/// Full title row by id, with the set genre flags expanded to their stored
/// labels.
pub async fn title_by_id(pool: &SqlitePool, show_id: &str) -> AppResult<Title> {
    let sql = format!("SELECT * FROM {} WHERE show_id = ?", TITLES_TABLE);
    let row = sqlx::query(&sql)
        .bind(show_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no title with show id `{}`", show_id)))?;

    let mut genres = Vec::new();
    for column in GENRE_COLUMNS {
        if row.try_get::<Option<i64>, _>(column.label)?.unwrap_or(0) != 0 {
            genres.push(column.label.to_string());
        }
    }

    Ok(Title {
        show_id: row.try_get("show_id")?,
        content_type: row.try_get("type")?,
        title: row.try_get("title")?,
        director: row.try_get("director")?,
        cast: row.try_get("cast")?,
        country: row.try_get("country")?,
        release_year: row.try_get("release_year")?,
        rating: row.try_get("rating")?,
        duration: row.try_get("duration")?,
        description: row.try_get("description")?,
        genres,
    })
}

/// Bulk scan of the keyless `movies_users` view, with set subscription
/// flags expanded to their stored labels. Read-only: there is no write path
/// for this table anywhere in the service.
pub async fn user_profiles(pool: &SqlitePool) -> AppResult<Vec<UserProfile>> {
    let sql = format!("SELECT * FROM {} ORDER BY user_id", USERS_TABLE);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    let mut profiles = Vec::with_capacity(rows.len());
    for row in rows {
        let mut subscriptions = Vec::new();
        for column in SUBSCRIPTION_COLUMNS {
            if row.try_get::<Option<i64>, _>(column.label)?.unwrap_or(0) != 0 {
                subscriptions.push(column.label.to_string());
            }
        }
        profiles.push(UserProfile {
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip: row.try_get("zip")?,
            subscriptions,
        });
    }
    Ok(profiles)
}
