//! Exercise Tracker Library
//!
//! A small REST backend for logging exercises against users. This module
//! exports the core types, services and router for testing and reuse.

pub mod config;
pub mod constants;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use services::{AdminService, ExerciseService, LogService, UserService};

/// Application state shared across all handlers
///
/// Owns the database handle; services are built from it per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.db.clone())
    }

    pub fn exercises(&self) -> ExerciseService {
        ExerciseService::new(self.db.clone())
    }

    pub fn logs(&self) -> LogService {
        LogService::new(self.db.clone())
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(self.db.clone())
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    use routes::*;

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health_check))
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:id/exercises", post(log_exercise))
        .route("/api/users/:id/logs", get(get_logs))
        .route("/api/deleteall", get(delete_all))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| tracing::warn!("Ignoring invalid CORS origin: {}", origin))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
