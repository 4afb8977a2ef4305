pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as student;
use crate::matching::handlers as matching;
use crate::recruiter::handlers as recruiter;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Student endpoints
        .route("/analyze-skills", post(student::handle_analyze_skills))
        .route("/career-path", post(matching::handle_career_path))
        .route("/learning-roadmap", post(student::handle_learning_roadmap))
        .route("/job-market", get(student::handle_job_market))
        // Recruiter endpoints
        .route("/jd-summarizer", post(recruiter::handle_jd_summarizer))
        .route("/cv-parser", post(recruiter::handle_cv_parser))
        .route("/match-scorer", post(matching::handle_match_scorer))
        .route(
            "/interview-scheduler",
            post(matching::handle_interview_scheduler),
        )
        .layer(body_limit)
        .with_state(state)
}
