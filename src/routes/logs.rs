use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{ExerciseLog, LogQuery};
use crate::AppState;

/// Retrieve a user's exercise log
///
/// GET /api/users/:id/logs?from=&to=&limit=
///
/// `from` and `to` are inclusive date bounds, `limit` caps the number of
/// entries returned. `count` always equals the length of `log`. A query string
/// that cannot be decoded at all (e.g. a repeated key) is a 400.
pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    params: std::result::Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<ExerciseLog>> {
    let Query(params) = params?;

    Ok(Json(state.logs().get_logs(&user_id, &params).await?))
}
