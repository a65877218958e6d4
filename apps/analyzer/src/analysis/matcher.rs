//! Skill matching and match scoring.
//!
//! Both operations use the same rule: a keyword counts as present when the
//! lower-cased text contains the lower-cased keyword anywhere. Matching is not
//! word-bounded, so "java" is found inside "javascript". That imprecision is
//! accepted behavior.

use serde::{Deserialize, Serialize};

/// Partition of the skill list into skills present in / absent from a resume.
/// Both sides keep skill-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Percentage of keywords present in a text, plus the matched/missing split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0-100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    /// True when the result was computed against an empty keyword list.
    /// The score is then 0 by convention rather than undefined.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.missing.is_empty()
    }

    pub fn keyword_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Splits `skills` into found and missing for the given resume text.
pub fn analyze<S: AsRef<str>>(text: &str, skills: &[S]) -> SkillAnalysis {
    let (found, missing) = partition(text, skills);
    SkillAnalysis { found, missing }
}

/// Scores `text` against an arbitrary keyword list.
///
/// `score = round(100 * matched / keywords)`, rounding halves up. An empty
/// keyword list yields score 0 with empty matched/missing.
pub fn score<S: AsRef<str>>(text: &str, keywords: &[S]) -> MatchResult {
    let (matched, missing) = partition(text, keywords);
    let score = percentage(matched.len(), keywords.len());
    MatchResult {
        score,
        matched,
        missing,
    }
}

/// Integer round-half-up of `100 * part / whole`; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u32
}

fn partition<S: AsRef<str>>(text: &str, keywords: &[S]) -> (Vec<String>, Vec<String>) {
    let text_lower = text.to_lowercase();
    let mut present = Vec::new();
    let mut absent = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if text_lower.contains(&keyword.to_lowercase()) {
            present.push(keyword.to_string());
        } else {
            absent.push(keyword.to_string());
        }
    }

    (present, absent)
}
