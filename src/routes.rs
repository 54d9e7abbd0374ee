use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{exercises, health, logs};

pub fn create_router(exercises_state: exercises::ExercisesState) -> Router {
    Router::new()
        .route("/users/{id}/exercises", post(exercises::add_exercise))
        .route("/users/{id}/logs", get(logs::get_logs))
        .with_state(exercises_state)
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
}
