//! HTML form handlers. Successful submissions redirect back to `/`; failed ones
//! re-render the page with a notice and the matching status code.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::analysis::handlers::read_resume_upload;
use crate::errors::AppError;
use crate::session::pipeline::{match_job_description, upload_resume};
use crate::state::AppState;
use crate::ui::IndexPage;

#[derive(Debug, Deserialize)]
pub struct JdForm {
    #[serde(default)]
    pub job_description: String,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_page(&state, None, None).await?))
}

/// POST /upload
pub async fn handle_upload_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    let result = match read_resume_upload(multipart).await {
        Ok(upload) => upload_resume(&state, upload.file_name, upload.bytes).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Redirect::to("/").into_response(),
        // The failed status already carries the extraction message.
        Err(e @ AppError::Extraction(_)) => error_page(&state, e, None, None).await,
        Err(e) => {
            let notice = e.user_message();
            error_page(&state, e, Some(notice), None).await
        }
    }
}

/// POST /match
pub async fn handle_match_form(
    State(state): State<AppState>,
    Form(form): Form<JdForm>,
) -> Response {
    let submitted = form.job_description.clone();
    match match_job_description(&state, form.job_description).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            let notice = e.user_message();
            error_page(&state, e, Some(notice), Some(submitted)).await
        }
    }
}

async fn render_page(
    state: &AppState,
    notice: Option<String>,
    jd_text: Option<String>,
) -> Result<String, AppError> {
    let view = state.session.read().await.view(&state.skills);
    let page = IndexPage::from_view(view, notice, jd_text);
    Ok(page.render()?)
}

async fn error_page(
    state: &AppState,
    error: AppError,
    notice: Option<String>,
    jd_text: Option<String>,
) -> Response {
    match render_page(state, notice, jd_text).await {
        Ok(html) => (error.status_code(), Html(html)).into_response(),
        Err(render_error) => render_error.into_response(),
    }
}
