//! Server-rendered page: upload form, score bars, skill tag clouds, JD match, feedback.

pub mod handlers;

use askama::Template;

use crate::analysis::matcher::MatchResult;
use crate::session::{AnalysisStatus, AnalysisView, Coverage};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// Disables the upload control and polls while an extraction is running.
    pub busy: bool,
    pub failure: Option<String>,
    pub notice: Option<String>,
    pub file_name: Option<String>,
    pub preview: Option<String>,
    pub overall_score: Option<u32>,
    pub has_skills: bool,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub coverage: Option<Coverage>,
    pub jd_text: String,
    pub jd: Option<MatchResult>,
    pub feedback: Vec<String>,
}

impl IndexPage {
    /// `jd_text` overrides the stored job description, so a rejected form
    /// submission keeps what the user typed.
    pub fn from_view(view: AnalysisView, notice: Option<String>, jd_text: Option<String>) -> Self {
        let (busy, failure) = match view.status {
            AnalysisStatus::InProgress { .. } => (true, None),
            AnalysisStatus::Failed { message } => (false, Some(message)),
            AnalysisStatus::Idle | AnalysisStatus::Complete => (false, None),
        };
        let (has_skills, found, missing) = match view.skills {
            Some(skills) => (true, skills.found, skills.missing),
            None => (false, Vec::new(), Vec::new()),
        };

        Self {
            busy,
            failure,
            notice,
            file_name: view.file_name,
            preview: view.text_preview,
            overall_score: view.overall_score,
            has_skills,
            found,
            missing,
            coverage: view.coverage,
            jd_text: jd_text.or(view.job_description).unwrap_or_default(),
            jd: view.jd_match,
            feedback: view.feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::SkillAnalysis;
    use uuid::Uuid;

    fn make_view(status: AnalysisStatus) -> AnalysisView {
        AnalysisView {
            status,
            file_name: None,
            analyzed_at: None,
            text_preview: None,
            text_chars: 0,
            overall_score: None,
            skills: None,
            coverage: None,
            job_description: None,
            jd_keywords: vec![],
            jd_match: None,
            feedback: vec![],
        }
    }

    fn make_complete_view() -> AnalysisView {
        AnalysisView {
            file_name: Some("cv.pdf".to_string()),
            text_preview: Some("Rust <script>alert(1)</script> engineer".to_string()),
            text_chars: 38,
            overall_score: Some(64),
            skills: Some(SkillAnalysis {
                found: vec!["rust".to_string(), "docker".to_string()],
                missing: vec!["kubernetes".to_string()],
            }),
            coverage: Some(Coverage {
                found: 2,
                total: 3,
                percent: 67,
            }),
            job_description: Some("Need kubernetes".to_string()),
            jd_keywords: vec!["kubernetes".to_string()],
            jd_match: Some(MatchResult {
                score: 0,
                matched: vec![],
                missing: vec!["kubernetes".to_string()],
            }),
            feedback: vec!["Tip: measure things.".to_string()],
            ..make_view(AnalysisStatus::Complete)
        }
    }

    #[test]
    fn test_idle_page_renders_upload_form_only() {
        let page = IndexPage::from_view(make_view(AnalysisStatus::Idle), None, None);
        let html = page.render().unwrap();
        assert!(html.contains("name=\"resume\""));
        assert!(!html.contains("Analyzing resume..."));
        assert!(!html.contains("ATS Score"));
    }

    #[test]
    fn test_busy_page_disables_upload() {
        let status = AnalysisStatus::InProgress {
            upload_id: Uuid::new_v4(),
        };
        let page = IndexPage::from_view(make_view(status), None, None);
        assert!(page.busy);
        let html = page.render().unwrap();
        assert!(html.contains("Analyzing resume..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_failed_page_shows_error() {
        let status = AnalysisStatus::Failed {
            message: "The uploaded file is not a PDF document".to_string(),
        };
        let html = IndexPage::from_view(make_view(status), None, None)
            .render()
            .unwrap();
        assert!(html.contains("not a PDF document"));
        assert!(!html.contains("Analyzing resume..."));
    }

    #[test]
    fn test_complete_page_renders_results_escaped() {
        let html = IndexPage::from_view(make_complete_view(), None, None)
            .render()
            .unwrap();
        assert!(html.contains("64% ATS compatibility"));
        assert!(html.contains("2/3 skills matched"));
        assert!(html.contains("JD Match Score"));
        assert!(html.contains("Tip: measure things."));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_jd_text_override_wins() {
        let page = IndexPage::from_view(
            make_complete_view(),
            Some("Job description cannot be empty".to_string()),
            Some("draft text".to_string()),
        );
        assert_eq!(page.jd_text, "draft text");
        let html = page.render().unwrap();
        assert!(html.contains("Job description cannot be empty"));
    }
}
