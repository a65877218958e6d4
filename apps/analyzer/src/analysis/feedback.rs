//! Feedback generation: canned advice picked by score thresholds.
//!
//! Pure function of the current analysis. Recomputed on every render, never stored.

use crate::analysis::matcher::{MatchResult, SkillAnalysis};

pub const LOW_SCORE: &str =
    "Your resume has a low ATS score. Add more relevant keywords and skills used in job descriptions.";
pub const AVERAGE_SCORE: &str =
    "Your ATS score is average. Try improving keyword density and project descriptions.";
pub const HIGH_SCORE: &str =
    "Great ATS score! Your resume is well-optimized for applicant tracking systems.";
pub const EXCELLENT_COVERAGE: &str =
    "Excellent skill coverage! Your resume includes most required skills.";
pub const POOR_ALIGNMENT: &str =
    "Your resume is not well aligned with this job description. Tailor your resume specifically for this role.";
pub const PARTIAL_ALIGNMENT: &str =
    "Your resume partially matches the job description. Minor tweaks can significantly improve alignment.";
pub const STRONG_ALIGNMENT: &str =
    "Strong job description match! Your resume aligns well with the role.";
pub const CLOSING_TIP: &str =
    "Tip: Use measurable achievements (numbers, impact) to strengthen your resume further.";

/// How many missing skills the suggestion message names.
const MAX_SUGGESTED_SKILLS: usize = 6;

/// Builds the ordered feedback list.
///
/// Empty unless the skill analysis, the overall score and the JD match result
/// are all available. Otherwise, in order: one overall-score message, one
/// missing-skills message, one JD-alignment message, the closing tip.
pub fn generate_feedback(
    skills: Option<&SkillAnalysis>,
    overall_score: Option<u32>,
    jd_match: Option<&MatchResult>,
) -> Vec<String> {
    let (Some(skills), Some(overall_score), Some(jd_match)) = (skills, overall_score, jd_match)
    else {
        return Vec::new();
    };

    let mut feedback = Vec::with_capacity(4);
    feedback.push(score_message(overall_score).to_string());
    feedback.push(missing_skills_message(&skills.missing));
    feedback.push(alignment_message(jd_match.score).to_string());
    feedback.push(CLOSING_TIP.to_string());
    feedback
}

fn score_message(score: u32) -> &'static str {
    if score < 40 {
        LOW_SCORE
    } else if score < 70 {
        AVERAGE_SCORE
    } else {
        HIGH_SCORE
    }
}

fn missing_skills_message(missing: &[String]) -> String {
    if missing.is_empty() {
        return EXCELLENT_COVERAGE.to_string();
    }
    let top: Vec<&str> = missing
        .iter()
        .take(MAX_SUGGESTED_SKILLS)
        .map(String::as_str)
        .collect();
    format!("Consider adding these important skills: {}.", top.join(", "))
}

fn alignment_message(jd_score: u32) -> &'static str {
    if jd_score < 50 {
        POOR_ALIGNMENT
    } else if jd_score < 75 {
        PARTIAL_ALIGNMENT
    } else {
        STRONG_ALIGNMENT
    }
}
