use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::AppState,
    auth::AuthUser,
    error::{AppError, AppResult},
    models::{HomeRecommendation, RelatedRecommendation},
    services::recommendations,
};

/// A user's precomputed home-page rails, grouped by genre and sorted by
/// descending score within each rail. Callers may only fetch their own rail
/// unless they hold the Admin role.
pub async fn home(
    user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<BTreeMap<String, Vec<HomeRecommendation>>>> {
    if user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Forbidden);
    }

    let rails = recommendations::home_page(&state.catalog, user_id).await?;
    Ok(Json(rails))
}

/// Precomputed "also liked" entries for a source title, best score first.
pub async fn related(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
) -> AppResult<Json<Vec<RelatedRecommendation>>> {
    let entries = recommendations::related(&state.catalog, &show_id).await?;
    Ok(Json(entries))
}
