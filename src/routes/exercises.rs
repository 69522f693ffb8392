use axum::{
    extract::{rejection::FormRejection, Path, State},
    Form, Json,
};

use crate::error::Result;
use crate::models::{LoggedExercise, NewExercise};
use crate::AppState;

/// Log an exercise for a user
///
/// POST /api/users/:id/exercises (form fields `description`, `duration`, optional `date`)
///
/// Returns 400 for a malformed body, missing fields or an unparseable date and
/// 404 when the user does not exist. Without a date the exercise is logged for now.
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: std::result::Result<Form<NewExercise>, FormRejection>,
) -> Result<Json<LoggedExercise>> {
    let Form(payload) = payload?;
    let logged = state.exercises().log_exercise(&user_id, payload).await?;

    Ok(Json(logged))
}
