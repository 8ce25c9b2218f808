use std::sync::Arc;

use crate::config::Config;
use crate::experience::Clock;
use crate::profile::ProfileExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Vocabulary-bound extractor, built once at startup.
    pub extractor: Arc<ProfileExtractor>,
    /// Source of "today" for open-ended ranges. `SystemClock` outside tests.
    pub clock: Arc<dyn Clock>,
}
