use serde::{Deserialize, Serialize};

/// Listing-shaped view of a catalog title, as returned by the genre rails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    pub show_id: String,
    pub title: Option<String>,
    pub release_year: Option<i64>,
    pub country: Option<String>,
}

/// Full catalog title, as returned by the detail endpoint.
///
/// `genres` carries the literal stored labels of every genre flag set on the
/// row; the flags are non-exclusive so any number may appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub show_id: String,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub release_year: Option<i64>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
}
