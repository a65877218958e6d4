//! Upload and JD-match pipelines.
//!
//! Flow: upload → extract (suspends) → analyze + score → commit to session.
//!       JD text → extract keywords → score resume text → commit to session.
//!
//! Both entry points are shared by the JSON API and the HTML form handlers.

use bytes::Bytes;
use tracing::{info, warn};

use crate::analysis::jd_keywords::{dedup_keywords, extract_keywords};
use crate::analysis::matcher::score;
use crate::errors::AppError;
use crate::session::{AnalysisView, JdMatch, ResumeAnalysis};
use crate::state::AppState;

/// Extracts and analyzes an uploaded resume, replacing the current session.
///
/// Runs on its own task so a client that disconnects mid-extraction cannot
/// leave the session stuck in `InProgress`. When a newer upload starts before
/// this one finishes, the stale result is dropped and `Superseded` returned.
pub async fn upload_resume(
    state: &AppState,
    file_name: String,
    bytes: Bytes,
) -> Result<AnalysisView, AppError> {
    let state = state.clone();
    tokio::spawn(async move { run_upload(&state, file_name, bytes).await })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("upload task failed: {e}")))?
}

async fn run_upload(
    state: &AppState,
    file_name: String,
    bytes: Bytes,
) -> Result<AnalysisView, AppError> {
    let upload_id = state.session.write().await.begin_upload();
    info!(%upload_id, file_name = %file_name, bytes = bytes.len(), "Resume upload started");

    // Lock released: a newer upload may begin while this one is extracting.
    let extracted = state.extractor.extract(bytes).await;

    let mut session = state.session.write().await;
    match extracted {
        Ok(text) => {
            if text.trim().is_empty() {
                warn!(%upload_id, "No text extracted; every skill will be reported missing");
            }
            let analysis = ResumeAnalysis::compute(upload_id, file_name, text, &state.skills);
            let overall_score = analysis.overall.score;
            let found = analysis.skills.found.len();

            if !session.complete_upload(analysis) {
                info!(%upload_id, "Discarding superseded upload");
                return Err(AppError::Superseded);
            }
            info!(%upload_id, overall_score, found, "Resume analyzed");
        }
        Err(e) => {
            if !session.fail_upload(upload_id, e.to_string()) {
                info!(%upload_id, "Discarding failure of superseded upload");
                return Err(AppError::Superseded);
            }
            warn!(%upload_id, error = %e, "Resume extraction failed");
            return Err(AppError::Extraction(e));
        }
    }

    Ok(session.view(&state.skills))
}

/// Scores the current resume against a pasted job description.
pub async fn match_job_description(
    state: &AppState,
    jd_text: String,
) -> Result<AnalysisView, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "job description cannot be empty".to_string(),
        ));
    }

    let mut session = state.session.write().await;
    let resume = session.resume().ok_or(AppError::NoResume)?;

    let mut keywords = extract_keywords(&jd_text, &state.skills);
    if state.config.jd_dedup_keywords {
        keywords = dedup_keywords(keywords);
    }
    if keywords.is_empty() {
        warn!("Job description mentions no known skills; JD score defaults to 0");
    }

    let result = score(&resume.text, &keywords);
    info!(
        keywords = result.keyword_count(),
        jd_score = result.score,
        "Job description matched"
    );

    session.set_jd_match(JdMatch {
        job_description: jd_text,
        keywords,
        result,
    });

    Ok(session.view(&state.skills))
}
