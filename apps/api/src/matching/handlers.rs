//! Axum route handlers for career paths, match scoring and interview scheduling.
//!
//! Request shape is validated here; the engine itself never fails.

use axum::{extract::State, Json};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::matching::career::{filter_paths, generate_career_paths, CareerPathMatch};
use crate::matching::engine::{
    composite_score, compute_match, matching_subset, CompositeScore, MatchStatus, Requirement,
};
use crate::matching::scheduling::{interview_day, schedule_if_eligible};
use crate::models::envelope::ApiResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerPathRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Keeps only paths whose role or industry contains this text.
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JdInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CvInput {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
}

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub jd: Option<JdInput>,
    pub cv: Option<CvInput>,
    /// Local wall-clock time to schedule from; defaults to the server clock.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub match_score: u32,
    pub missing_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<NaiveDateTime>,
    pub message: String,
    pub matching_preferred_skills: Vec<String>,
    pub composite: CompositeScore,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    #[serde(default)]
    pub match_score: i64,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub struct InterviewOutcome {
    pub candidate_name: String,
    pub match_score: u32,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<NaiveDateTime>,
    pub message: String,
}

const UNKNOWN_CANDIDATE: &str = "Unknown";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /career-path
///
/// Ranks the catalog's role templates against the submitted skills.
pub async fn handle_career_path(
    State(state): State<AppState>,
    AppJson(request): AppJson<CareerPathRequest>,
) -> Result<Json<ApiResponse<Vec<CareerPathMatch>>>, AppError> {
    if request.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("Skills list is required".to_string()));
    }

    let mut paths = generate_career_paths(&request.skills, &state.catalog.career_templates);
    if let Some(filter) = request.filter.as_deref() {
        paths = filter_paths(paths, filter);
    }

    info!(
        skills = request.skills.len(),
        paths = paths.len(),
        best = paths.first().map(|p| p.match_percentage).unwrap_or(0),
        "Career paths generated"
    );

    let message = format!("Found {} potential career paths.", paths.len());
    Ok(Json(ApiResponse::ok(paths, message)))
}

/// POST /match-scorer
///
/// Scores a parsed CV against a parsed JD. Shortlisted candidates get an
/// interview date straight away.
pub async fn handle_match_scorer(
    AppJson(request): AppJson<MatchScoreRequest>,
) -> Result<Json<ApiResponse<MatchReport>>, AppError> {
    let (jd, cv) = match (request.jd, request.cv) {
        (Some(jd), Some(cv)) => (jd, cv),
        _ => {
            return Err(AppError::Validation(
                "Both JD and CV data are required".to_string(),
            ))
        }
    };

    let result = compute_match(&cv.skills, &jd.required_skills);
    let matching_preferred_skills = matching_subset(&cv.skills, &jd.preferred_skills);
    let requirement = Requirement {
        name: jd.title.unwrap_or_default(),
        required: jd.required_skills,
        preferred: jd.preferred_skills,
    };
    let composite = composite_score(&cv.skills, &requirement, cv.experience_years);

    let now = scheduling_clock(request.now)?;
    let interview_date = schedule_if_eligible(result.score_percent, now).interview_date();

    let message = match result.status {
        MatchStatus::Shortlisted => format!(
            "Excellent match! Candidate meets {}% of requirements.",
            result.score_percent
        ),
        MatchStatus::Rejected => format!("Candidate scored {}% match.", result.score_percent),
    };

    let candidate_name = cv
        .candidate_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());

    info!(
        candidate = %candidate_name,
        role = %requirement.name,
        score = result.score_percent,
        status = result.status.as_str(),
        composite = composite.total,
        "Match scored"
    );

    let report = MatchReport {
        candidate_id: Uuid::new_v4(),
        candidate_name,
        match_score: result.score_percent,
        missing_skills: result.missing_skills,
        matching_skills: result.matching_skills,
        status: result.status,
        interview_date,
        message,
        matching_preferred_skills,
        composite,
    };

    Ok(Json(ApiResponse::ok(report, "Match analysis completed.")))
}

/// POST /interview-scheduler
///
/// Schedules an interview two days out at 11:00 when `match_score >= 80`.
/// A rejected candidate is a normal outcome, reported with `success: false`.
pub async fn handle_interview_scheduler(
    AppJson(request): AppJson<InterviewRequest>,
) -> Result<Json<ApiResponse<InterviewOutcome>>, AppError> {
    let match_score = u32::try_from(request.match_score)
        .ok()
        .filter(|score| *score <= 100)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "match_score must be between 0 and 100, got {}",
                request.match_score
            ))
        })?;

    let candidate_name = request
        .candidate_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());
    let now = scheduling_clock(request.now)?;

    let decision = schedule_if_eligible(match_score, now);
    info!(
        candidate = %candidate_name,
        match_score,
        status = decision.status().as_str(),
        "Interview scheduling decided"
    );

    let response = match decision.interview_date() {
        None => ApiResponse::declined(
            InterviewOutcome {
                candidate_name,
                match_score,
                status: MatchStatus::Rejected,
                interview_date: None,
                message: "Candidate did not pass screening.".to_string(),
            },
            "Candidate does not meet minimum requirements.",
        ),
        Some(date) => ApiResponse::ok(
            InterviewOutcome {
                candidate_name,
                match_score,
                status: MatchStatus::Shortlisted,
                interview_date: Some(date),
                message: format!(
                    "Candidate shortlisted. Interview scheduled on {} at 11:00 AM. Email notification ready.",
                    date.format("%Y-%m-%d")
                ),
            },
            "Interview scheduled successfully.",
        ),
    };

    Ok(Json(response))
}

/// Resolves the scheduling clock, rejecting a `now` too close to the end of
/// the calendar to fit an interview after it.
fn scheduling_clock(now: Option<NaiveDateTime>) -> Result<NaiveDateTime, AppError> {
    let now = now.unwrap_or_else(|| Local::now().naive_local());
    if interview_day(now).is_none() {
        return Err(AppError::Validation(format!(
            "now is out of range for scheduling: {now}"
        )));
    }
    Ok(now)
}
