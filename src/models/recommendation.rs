use serde::{Deserialize, Serialize};

/// One entry of a user's precomputed home-page rail.
///
/// Sourced verbatim from `homepage_recommendations`; this service never
/// writes or rescores these rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomeRecommendation {
    pub show_id: String,
    pub title: Option<String>,
    pub score: f64,
}

/// One "users who liked X also liked Y" entry from
/// `user_movie_recommendations`, scoped by the source title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRecommendation {
    pub source_show_id: String,
    pub show_id: String,
    pub title: Option<String>,
    pub score: f64,
}
