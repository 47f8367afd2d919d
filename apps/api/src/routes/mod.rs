pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/evaluate-candidates",
            post(handlers::handle_evaluate_candidates),
        )
        .route("/test-gpt", post(handlers::handle_test_gpt))
        .with_state(state)
}
