use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::skills::SkillList;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only reference vocabulary, loaded once at startup.
    pub skills: Arc<SkillList>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// The single current analysis, replaced wholesale on every upload.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(config: Config, skills: SkillList, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            config,
            skills: Arc::new(skills),
            extractor,
            session: Arc::new(RwLock::new(Session::default())),
        }
    }
}
