//! Authoritative mapping between logical entities and the relational schema.
//!
//! The catalog store uses free-form, space-containing column labels for the
//! denormalized genre and subscription flags ("Kids' TV", "Amazon Prime").
//! All of those labels live here, behind lookup functions, so the rest of
//! the crate only ever handles logical snake_case names and asks this module
//! for the quoted SQL identifier. [`verify_schema`] cross-checks the mapping
//! against the live database at startup and refuses to proceed on any
//! missing table or column.

use sqlx::{Row, SqlitePool};

use crate::genre;

pub const TITLES_TABLE: &str = "movies_titles";
pub const USERS_TABLE: &str = "movies_users";
pub const RATINGS_TABLE: &str = "movies_ratings";
pub const HOMEPAGE_RECS_TABLE: &str = "homepage_recommendations";
pub const USER_RECS_TABLE: &str = "user_movie_recommendations";

/// Stored column name for a rating's star value. The in-memory property is
/// called `star_rating`; the table column is simply `rating`.
pub const RATING_STAR_COLUMN: &str = "rating";

/// A denormalized boolean flag column with a literal stored label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagColumn {
    /// Conventional snake_case name used in code.
    pub logical: &'static str,
    /// Literal column label as persisted in SQLite.
    pub label: &'static str,
}

/// The genre flag columns of `movies_titles`. A title may carry any number
/// of these simultaneously.
pub const GENRE_COLUMNS: &[FlagColumn] = &[
    FlagColumn { logical: "action", label: "Action" },
    FlagColumn { logical: "adventure", label: "Adventure" },
    FlagColumn { logical: "anime_series_international_tv_shows", label: "Anime Series International TV Shows" },
    FlagColumn { logical: "british_tv_shows_docuseries_international_tv_shows", label: "British TV Shows Docuseries International TV Shows" },
    FlagColumn { logical: "comedies", label: "Comedies" },
    FlagColumn { logical: "comedies_dramas_international_movies", label: "Comedies Dramas International Movies" },
    FlagColumn { logical: "comedies_international_movies", label: "Comedies International Movies" },
    FlagColumn { logical: "comedies_romantic_movies", label: "Comedies Romantic Movies" },
    FlagColumn { logical: "crime_tv_shows_docuseries", label: "Crime TV Shows Docuseries" },
    FlagColumn { logical: "documentaries", label: "Documentaries" },
    FlagColumn { logical: "documentaries_international_movies", label: "Documentaries International Movies" },
    FlagColumn { logical: "dramas", label: "Dramas" },
    FlagColumn { logical: "dramas_international_movies", label: "Dramas International Movies" },
    FlagColumn { logical: "dramas_romantic_movies", label: "Dramas Romantic Movies" },
    FlagColumn { logical: "family_movies", label: "Family Movies" },
    FlagColumn { logical: "horror_movies", label: "Horror Movies" },
    FlagColumn { logical: "international_movies_thrillers", label: "International Movies Thrillers" },
    FlagColumn { logical: "international_tv_shows_romantic_tv_shows_tv_dramas", label: "International TV Shows Romantic TV Shows TV Dramas" },
    FlagColumn { logical: "kids_tv", label: "Kids' TV" },
    FlagColumn { logical: "language_tv_shows", label: "Language TV Shows" },
    FlagColumn { logical: "nature_tv", label: "Nature TV" },
    FlagColumn { logical: "reality_tv", label: "Reality TV" },
    FlagColumn { logical: "talk_shows_tv_comedies", label: "Talk Shows TV Comedies" },
    FlagColumn { logical: "thrillers", label: "Thrillers" },
    FlagColumn { logical: "tv_action", label: "TV Action" },
    FlagColumn { logical: "tv_comedies", label: "TV Comedies" },
    FlagColumn { logical: "tv_dramas", label: "TV Dramas" },
];

/// The per-service subscription flag columns of `movies_users`.
pub const SUBSCRIPTION_COLUMNS: &[FlagColumn] = &[
    FlagColumn { logical: "netflix", label: "Netflix" },
    FlagColumn { logical: "amazon_prime", label: "Amazon Prime" },
    FlagColumn { logical: "disney_plus", label: "Disney+" },
    FlagColumn { logical: "paramount_plus", label: "Paramount+" },
    FlagColumn { logical: "max", label: "Max" },
    FlagColumn { logical: "hulu", label: "Hulu" },
    FlagColumn { logical: "apple_tv_plus", label: "Apple TV+" },
    FlagColumn { logical: "peacock", label: "Peacock" },
];

/// Stored label for a logical genre attribute name.
pub fn label_for(logical: &str) -> Option<&'static str> {
    GENRE_COLUMNS
        .iter()
        .find(|c| c.logical == logical)
        .map(|c| c.label)
}

/// Resolve a caller-supplied genre name to its flag column, matching
/// case- and punctuation-insensitively via [`genre::normalize`].
pub fn genre_by_name(name: &str) -> Option<&'static FlagColumn> {
    let wanted = genre::normalize(name);
    GENRE_COLUMNS
        .iter()
        .find(|c| genre::normalize(c.label) == wanted)
}

/// Double-quote an identifier for embedding in SQLite SQL. Only ever called
/// with the static labels above, never with caller input.
pub fn quote_ident(label: &str) -> String {
    format!("\"{}\"", label.replace('"', "\"\""))
}

/// Expected columns per table, used by [`verify_schema`].
fn expected_tables() -> Vec<(&'static str, Vec<String>)> {
    let mut titles: Vec<String> = [
        "show_id",
        "type",
        "title",
        "director",
        "cast",
        "country",
        "release_year",
        "rating",
        "duration",
        "description",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    titles.extend(GENRE_COLUMNS.iter().map(|c| c.label.to_string()));

    let mut users: Vec<String> = [
        "user_id", "name", "phone", "email", "age", "gender", "city", "state", "zip",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    users.extend(SUBSCRIPTION_COLUMNS.iter().map(|c| c.label.to_string()));

    vec![
        (TITLES_TABLE, titles),
        (USERS_TABLE, users),
        (
            RATINGS_TABLE,
            vec![
                "user_id".to_string(),
                "show_id".to_string(),
                RATING_STAR_COLUMN.to_string(),
            ],
        ),
        (
            HOMEPAGE_RECS_TABLE,
            ["user_id", "genre", "show_id", "title", "score"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        (
            USER_RECS_TABLE,
            ["user_id", "source_show_id", "show_id", "title", "score"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
    ]
}

/// Fail-fast startup check: every mapped table and column must exist in the
/// catalog store. A renamed table or dropped column aborts startup with a
/// descriptive error instead of silently returning empty data later.
pub async fn verify_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    for (table, columns) in expected_tables() {
        let rows = sqlx::query(&format!("PRAGMA table_info({})", quote_ident(table)))
            .fetch_all(pool)
            .await?;
        if rows.is_empty() {
            anyhow::bail!("schema check failed: table `{}` is missing", table);
        }

        let present: Vec<String> = rows
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect();
        for column in &columns {
            if !present.iter().any(|p| p == column) {
                anyhow::bail!(
                    "schema check failed: table `{}` is missing column `{}`",
                    table,
                    column
                );
            }
        }

        // The rating upsert's ON CONFLICT target needs the composite key to
        // exist as a unique constraint, so a ratings table without it must
        // fail here rather than 500 on the first submission.
        if table == RATINGS_TABLE {
            let mut pk_columns: Vec<String> = rows
                .iter()
                .filter(|row| row.get::<i64, _>("pk") > 0)
                .map(|row| row.get::<String, _>("name"))
                .collect();
            pk_columns.sort();
            if pk_columns != ["show_id", "user_id"] {
                anyhow::bail!(
                    "schema check failed: table `{}` must declare a composite \
                     primary key on (user_id, show_id), found ({})",
                    table,
                    pk_columns.join(", ")
                );
            }
        }

        tracing::debug!(table, columns = columns.len(), "schema check passed");
    }

    Ok(())
}
