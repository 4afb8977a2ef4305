//! Axum route handlers for the recruiter upload tools.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::envelope::ApiResponse;
use crate::models::recruiter::{CvParsedData, JdSummary};
use crate::recruiter::cv_parser::parse_cv;
use crate::recruiter::jd_summarizer::summarize_jd;
use crate::state::AppState;
use crate::upload::read_file_field;

/// POST /jd-summarizer
pub async fn handle_jd_summarizer(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<JdSummary>>, AppError> {
    let mut multipart = multipart?;
    let upload = read_file_field(&mut multipart).await?;
    let text = upload.text().await?;

    let summary = summarize_jd(&state.catalog, &text);
    info!(
        filename = %upload.filename,
        chars = text.len(),
        title = %summary.title,
        "Job description summarized"
    );

    Ok(Json(ApiResponse::ok(
        summary,
        "Job description analyzed successfully.",
    )))
}

/// POST /cv-parser
pub async fn handle_cv_parser(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<CvParsedData>>, AppError> {
    let mut multipart = multipart?;
    let upload = read_file_field(&mut multipart).await?;
    // Decoded only to reject unreadable PDFs; the mock parse uses the filename.
    upload.text().await?;

    let cv = parse_cv(
        &upload.filename,
        &state.catalog.cv_template,
        state.rng.as_ref(),
    );
    info!(
        filename = %upload.filename,
        candidate = %cv.candidate_name,
        "CV parsed"
    );

    Ok(Json(ApiResponse::ok(cv, "CV parsed successfully.")))
}
