use axum::{extract::State, Json};

use crate::error::Result;
use crate::services::ResetSummary;
use crate::AppState;

/// Delete every user and exercise
///
/// GET /api/deleteall
///
/// Unauthenticated and irreversible. Intended for resetting test deployments.
pub async fn delete_all(State(state): State<AppState>) -> Result<Json<ResetSummary>> {
    Ok(Json(state.admin().reset_all().await?))
}
