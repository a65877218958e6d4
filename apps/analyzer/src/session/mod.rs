//! The current analysis held for display.
//!
//! There is exactly one session per process. Each upload replaces it wholesale;
//! nothing survives a restart. The status is an explicit state machine so a
//! failed extraction can never leave the page stuck in "analyzing".

pub mod pipeline;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::feedback::generate_feedback;
use crate::analysis::matcher::{analyze, percentage, score, MatchResult, SkillAnalysis};
use crate::analysis::skills::SkillList;

/// Characters of extracted text shown in the preview. Scoring always uses the full text.
pub const PREVIEW_CHARS: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    InProgress {
        upload_id: Uuid,
    },
    Failed {
        message: String,
    },
    Complete,
}

/// Everything derived from one uploaded resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    pub text: String,
    pub skills: SkillAnalysis,
    pub overall: MatchResult,
}

impl ResumeAnalysis {
    /// Runs the skill matcher and the overall scorer over freshly extracted text.
    pub fn compute(id: Uuid, file_name: String, text: String, skills: &SkillList) -> Self {
        let skill_analysis = analyze(&text, skills.as_slice());
        let overall = score(&text, skills.as_slice());
        Self {
            id,
            file_name,
            analyzed_at: Utc::now(),
            text,
            skills: skill_analysis,
            overall,
        }
    }
}

/// A job description scored against the current resume.
#[derive(Debug, Clone, Serialize)]
pub struct JdMatch {
    pub job_description: String,
    pub keywords: Vec<String>,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub found: usize,
    pub total: usize,
    pub percent: u32,
}

/// Read model served to the page and the JSON API. Feedback is regenerated on
/// every snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub status: AnalysisStatus,
    pub file_name: Option<String>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub text_preview: Option<String>,
    pub text_chars: usize,
    pub overall_score: Option<u32>,
    pub skills: Option<SkillAnalysis>,
    pub coverage: Option<Coverage>,
    pub job_description: Option<String>,
    pub jd_keywords: Vec<String>,
    pub jd_match: Option<MatchResult>,
    pub feedback: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    status: AnalysisStatus,
    resume: Option<ResumeAnalysis>,
    jd_match: Option<JdMatch>,
}

impl Session {
    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    pub fn resume(&self) -> Option<&ResumeAnalysis> {
        self.resume.as_ref()
    }

    /// Starts a new upload. The previous resume and its JD match are discarded;
    /// any upload still in flight is superseded.
    pub fn begin_upload(&mut self) -> Uuid {
        let upload_id = Uuid::new_v4();
        self.status = AnalysisStatus::InProgress { upload_id };
        self.resume = None;
        self.jd_match = None;
        upload_id
    }

    /// True while `upload_id` is the most recently started upload.
    pub fn is_pending(&self, upload_id: Uuid) -> bool {
        matches!(self.status, AnalysisStatus::InProgress { upload_id: id } if id == upload_id)
    }

    /// Stores a finished analysis. Returns false (and stores nothing) when a
    /// newer upload has started since.
    pub fn complete_upload(&mut self, analysis: ResumeAnalysis) -> bool {
        if !self.is_pending(analysis.id) {
            return false;
        }
        self.resume = Some(analysis);
        self.status = AnalysisStatus::Complete;
        true
    }

    /// Records an extraction failure for `upload_id` unless it was superseded.
    pub fn fail_upload(&mut self, upload_id: Uuid, message: String) -> bool {
        if !self.is_pending(upload_id) {
            return false;
        }
        self.status = AnalysisStatus::Failed { message };
        true
    }

    pub fn set_jd_match(&mut self, jd_match: JdMatch) {
        self.jd_match = Some(jd_match);
    }

    pub fn view(&self, skills: &SkillList) -> AnalysisView {
        let resume = self.resume.as_ref();
        let jd = self.jd_match.as_ref();

        let feedback = generate_feedback(
            resume.map(|r| &r.skills),
            resume.map(|r| r.overall.score),
            jd.map(|j| &j.result),
        );

        AnalysisView {
            status: self.status().clone(),
            file_name: resume.map(|r| r.file_name.clone()),
            analyzed_at: resume.map(|r| r.analyzed_at),
            text_preview: resume.map(|r| preview(&r.text, PREVIEW_CHARS)),
            text_chars: resume.map(|r| r.text.chars().count()).unwrap_or(0),
            overall_score: resume.map(|r| r.overall.score),
            skills: resume.map(|r| r.skills.clone()),
            coverage: resume.map(|r| Coverage {
                found: r.skills.found.len(),
                total: skills.len(),
                percent: percentage(r.skills.found.len(), skills.len()),
            }),
            job_description: jd.map(|j| j.job_description.clone()),
            jd_keywords: jd.map(|j| j.keywords.clone()).unwrap_or_default(),
            jd_match: jd.map(|j| j.result.clone()),
            feedback,
        }
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
