use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

/// GET /
/// Service banner with the endpoint listing.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Platform API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "student": ["/analyze-skills", "/career-path", "/learning-roadmap", "/job-market"],
            "recruiter": ["/jd-summarizer", "/cv-parser", "/match-scorer", "/interview-scheduler"]
        }
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().naive_local(),
        "services": {
            "api": "operational",
            "database": "not_connected",
            "ai_models": "mock_mode"
        }
    }))
}
