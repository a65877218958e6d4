// Resume analysis: skill list, matching, scoring, JD keywords, feedback.
// Everything here is a pure function of its inputs; the skill list is always
// passed in explicitly. Session state lives in `crate::session`.

pub mod feedback;
pub mod handlers;
pub mod jd_keywords;
pub mod matcher;
pub mod skills;

pub use skills::SkillList;
