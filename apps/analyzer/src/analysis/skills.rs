//! Skill list: the fixed reference vocabulary every resume is checked against.
//!
//! Loaded once at startup (compiled-in `data/skills.txt` or `SKILLS_PATH`) and
//! handed to the matchers explicitly. Never mutated after construction.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

const BUILTIN_SKILLS: &str = include_str!("../../data/skills.txt");

/// Ordered, de-duplicated, lowercase skill names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillList {
    skills: Vec<String>,
}

impl SkillList {
    /// Parses one skill per line. Blank lines and `#` comments are skipped,
    /// names are trimmed and lower-cased, later duplicates are dropped.
    pub fn parse(contents: &str) -> Self {
        let mut seen = HashSet::new();
        let skills = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .filter(|skill| seen.insert(skill.clone()))
            .collect();
        Self { skills }
    }

    /// The list shipped with the binary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_SKILLS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill list: {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    /// Exact membership, used by the job-description keyword filter.
    pub fn contains(&self, word: &str) -> bool {
        self.skills.iter().any(|s| s == word)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let joined: Vec<String> = iter.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse(&joined.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let list = SkillList::parse("# header\n\nrust\n  # indented comment\ndocker\n");
        assert_eq!(list.as_slice(), &["rust".to_string(), "docker".to_string()]);
    }

    #[test]
    fn test_parse_lowercases_trims_and_dedups_in_order() {
        let list = SkillList::parse("  React \nAWS\nreact\naws\nGraphQL");
        assert_eq!(list.as_slice(), &["react", "aws", "graphql"]);
    }

    #[test]
    fn test_builtin_list_is_nonempty_and_lowercase() {
        let list = SkillList::builtin();
        assert!(!list.is_empty());
        for skill in list.as_slice() {
            assert_eq!(skill, &skill.to_lowercase());
            assert!(!skill.starts_with('#'));
        }
        assert!(list.contains("kubernetes"));
        assert!(list.contains("terraform"));
    }

    #[test]
    fn test_contains_is_exact() {
        let list: SkillList = ["javascript"].into_iter().collect();
        assert!(list.contains("javascript"));
        assert!(!list.contains("java"));
        assert!(!list.contains("JavaScript"));
    }

    #[test]
    fn test_from_file_reads_skills() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kafka\n# streaming\nspark").unwrap();
        let list = SkillList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &["kafka", "spark"]);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let err = SkillList::from_file(Path::new("/nonexistent/skills.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read skill list"));
    }
}
