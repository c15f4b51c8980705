use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    api::AppState,
    auth::AuthUser,
    error::{AppError, AppResult},
    models::Rating,
    services::ratings,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub user_id: i64,
    pub show_id: String,
    pub rating: i64,
}

/// Upsert a star rating for (userId, showId) and echo the stored row. The
/// body's userId must match the token subject unless the caller is an Admin.
pub async fn submit(
    user: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<SubmitRatingRequest>,
) -> AppResult<Json<Rating>> {
    if request.user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Forbidden);
    }

    let stored = ratings::submit(
        &state.catalog,
        request.user_id,
        &request.show_id,
        request.rating,
    )
    .await?;

    Ok(Json(stored))
}
