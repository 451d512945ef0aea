pub mod health;

use axum::{routing::get, Router};

use crate::browse::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route(
            "/api/v1/jobs/:job_id/candidates",
            get(handlers::handle_list_candidates),
        )
        .with_state(state)
}
