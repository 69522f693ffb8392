use axum::{extract::rejection::FormRejection, extract::State, Form, Json};

use crate::error::Result;
use crate::models::{NewUser, User};
use crate::AppState;

/// Create a user
///
/// POST /api/users (form field `username`)
///
/// Returns 400 when the username is missing or blank, or when the body is not
/// a url-encoded form.
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Form<NewUser>, FormRejection>,
) -> Result<Json<User>> {
    let Form(payload) = payload?;
    let user = state.users().create_user(payload.username.as_deref()).await?;

    Ok(Json(user))
}

/// List all users as `{username, id}` objects
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users().list_users().await?))
}
