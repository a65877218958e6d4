//! Job-description keyword extraction.
//!
//! Keeps only words that are exact members of the skill list, so the JD score
//! measures the resume against the skills the posting actually mentions.

use std::collections::HashSet;

use crate::analysis::skills::SkillList;

/// Tokens of this length or shorter are never keywords.
const MIN_TOKEN_LEN: usize = 3;

/// Extracts skill keywords from free-form JD text, in order of appearance.
///
/// The text is lower-cased, every character other than `a-z`, `A-Z` and the
/// ASCII space is removed (newlines included, so words split only by a line
/// break merge), and the rest is split on single spaces. Tokens longer than
/// three characters that are exact skill-list members are kept. Duplicates
/// are kept as well.
pub fn extract_keywords(jd_text: &str, skills: &SkillList) -> Vec<String> {
    let cleaned: String = jd_text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    cleaned
        .split(' ')
        .filter(|token| token.len() > MIN_TOKEN_LEN && skills.contains(token))
        .map(String::from)
        .collect()
}

/// Drops repeated keywords, keeping the first occurrence.
pub fn dedup_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
