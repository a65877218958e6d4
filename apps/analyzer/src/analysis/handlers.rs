//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::matcher::{score, MatchResult};
use crate::errors::AppError;
use crate::session::pipeline::{match_job_description, upload_resume};
use crate::session::AnalysisView;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// Shown when a PDF part arrives without a filename.
const DEFAULT_FILE_NAME: &str = "resume.pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JdMatchRequest {
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub text: String,
    /// Defaults to the full skill list.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    pub count: usize,
}

/// A validated resume upload.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/analysis
///
/// Returns the current analysis with freshly generated feedback.
pub async fn handle_get_analysis(State(state): State<AppState>) -> Json<AnalysisView> {
    let session = state.session.read().await;
    Json(session.view(&state.skills))
}

/// POST /api/v1/analysis
///
/// Accepts a single PDF in the `resume` multipart field, extracts its text and
/// scores it against the skill list. Replaces the current analysis.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisView>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let view = upload_resume(&state, upload.file_name, upload.bytes).await?;
    Ok(Json(view))
}

/// POST /api/v1/analysis/jd-match
pub async fn handle_jd_match(
    State(state): State<AppState>,
    Json(request): Json<JdMatchRequest>,
) -> Result<Json<AnalysisView>, AppError> {
    let view = match_job_description(&state, request.jd_text).await?;
    Ok(Json(view))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.skills.as_slice().to_vec(),
        count: state.skills.len(),
    })
}

/// POST /api/v1/score
///
/// Stateless scoring of arbitrary text. Does not touch the current analysis.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<MatchResult> {
    let result = match &request.keywords {
        Some(keywords) => score(&request.text, keywords.as_slice()),
        None => score(&request.text, state.skills.as_slice()),
    };
    Json(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

/// Reads the `resume` field and checks it looks like a PDF upload.
/// Other fields are drained and ignored.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            field.bytes().await.map_err(multipart_error)?;
            continue;
        }
        if upload.is_some() {
            return Err(AppError::Validation(
                "Only one resume file can be uploaded at a time".to_string(),
            ));
        }

        let file_name = field.file_name().map(str::to_string);
        let is_pdf_type = field.content_type() == Some("application/pdf");
        let has_pdf_name = file_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if !is_pdf_type && !has_pdf_name {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(AppError::Validation("The uploaded file is empty".to_string()));
        }

        upload = Some(ResumeUpload {
            file_name: file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            bytes,
        });
    }

    upload.ok_or_else(|| AppError::Validation(format!("Missing '{RESUME_FIELD}' file field")))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("The uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
