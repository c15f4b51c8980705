use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::AppState,
    error::AppResult,
    models::{Title, TitleSummary},
    services::catalog,
};

/// All genre rails keyed by the literal stored genre label.
pub async fn by_genre(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Vec<TitleSummary>>>> {
    let rails = catalog::titles_by_genre(&state.catalog).await?;
    Ok(Json(rails))
}

/// Titles carrying one genre flag; the path segment is matched case- and
/// punctuation-insensitively, and an unknown genre is an empty array.
pub async fn genre_rail(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<TitleSummary>>> {
    let titles = catalog::titles_for_genre(&state.catalog, &genre).await?;
    Ok(Json(titles))
}

/// Full title detail, 404 when the show id is unknown.
pub async fn detail(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
) -> AppResult<Json<Title>> {
    let title = catalog::title_by_id(&state.catalog, &show_id).await?;
    Ok(Json(title))
}
