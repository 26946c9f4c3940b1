pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview_handlers;
use crate::jobs::handlers as job_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/job-details", get(job_handlers::handle_job_details))
        .route(
            "/api/parse-resume",
            post(interview_handlers::handle_parse_resume),
        )
        .route(
            "/api/evaluate-answer",
            post(interview_handlers::handle_evaluate_answer),
        )
        .with_state(state)
}
