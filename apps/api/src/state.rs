use std::sync::Arc;

use crate::config::Config;
use crate::extraction::keywords::SectionLexicon;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion capability behind a trait so tests can swap in a fake.
    pub llm: Arc<dyn ChatCompletion>,
    /// Read-only keyword tables, built once at startup.
    pub lexicon: Arc<SectionLexicon>,
    pub config: Config,
}
