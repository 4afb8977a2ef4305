//! Axum route handlers for the student-facing endpoints.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::market::market_insights;
use crate::analysis::roadmap::build_roadmap;
use crate::errors::{AppError, AppJson};
use crate::models::envelope::ApiResponse;
use crate::models::student::{JobMarketInsight, LearningResource, SkillAnalysis};
use crate::state::AppState;
use crate::upload::read_file_field;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
pub struct MarketQuery {
    pub role: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-skills
///
/// Extracts skills from an uploaded CV or transcript (multipart field `file`).
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<Vec<SkillAnalysis>>>, AppError> {
    let mut multipart = multipart?;
    let upload = read_file_field(&mut multipart).await?;
    let text = upload.text().await?;

    let skills = state.skill_extractor.extract(&text);
    info!(
        filename = %upload.filename,
        found = skills.len(),
        "Skills analyzed"
    );

    let message = format!(
        "Successfully analyzed {} skills from the document.",
        skills.len()
    );
    Ok(Json(ApiResponse::ok(skills, message)))
}

/// POST /learning-roadmap
pub async fn handle_learning_roadmap(
    State(state): State<AppState>,
    AppJson(request): AppJson<RoadmapRequest>,
) -> Result<Json<ApiResponse<Vec<LearningResource>>>, AppError> {
    let target_role = request.target_role.trim();
    if target_role.is_empty() {
        return Err(AppError::Validation("Target role is required".to_string()));
    }

    let resources = build_roadmap(&state.catalog, target_role);
    info!(
        target_role,
        current_skills = request.current_skills.len(),
        resources = resources.len(),
        "Learning roadmap generated"
    );

    let message = format!("Generated learning roadmap for {target_role}.");
    Ok(Json(ApiResponse::ok(resources, message)))
}

/// GET /job-market?role=
pub async fn handle_job_market(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<ApiResponse<Vec<JobMarketInsight>>>, AppError> {
    let insights = market_insights(&state.catalog, query.role.as_deref());
    let message = format!("Retrieved {} job market insights.", insights.len());
    Ok(Json(ApiResponse::ok(insights, message)))
}
