use axum::{extract::State, Json};

use crate::{
    api::AppState, auth::RequireAdmin, error::AppResult, models::UserProfile, services::catalog,
};

/// Bulk scan of the user reporting view. Admin role required.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserProfile>>> {
    let profiles = catalog::user_profiles(&state.catalog).await?;
    Ok(Json(profiles))
}
