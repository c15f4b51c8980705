use serde::{Deserialize, Serialize};

/// A user's 1-5 star score for a title.
///
/// Rows are unique per (user_id, show_id); the stored column is named
/// `rating` even though the property is the star value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: i64,
    pub show_id: String,
    #[sqlx(rename = "rating")]
    #[serde(rename = "rating")]
    pub star_rating: i64,
}

/// Inclusive bounds on a valid star rating.
pub const MIN_STARS: i64 = 1;
pub const MAX_STARS: i64 = 5;
