use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::db::record_counts;
use crate::error::AppError;
use crate::AppState;

/// Health check endpoint
///
/// GET /health
///
/// Reads the record counts of both collections. Any store failure turns the
/// response into a 503 so load balancers stop routing here.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let db = state.db.clone();
    let counts = tokio::task::spawn_blocking(move || record_counts(&db))
        .await
        .map_err(AppError::from)
        .and_then(|counts| counts);

    match counts {
        Ok(counts) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "users": counts.users,
                "exercises": counts.exercises,
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::error!("Health check could not read the database: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "unavailable",
                    "version": env!("CARGO_PKG_VERSION"),
                })),
            )
        }
    }
}
