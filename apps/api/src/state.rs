use std::sync::Arc;

use crate::config::Config;
use crate::jobs::source::JobSource;
use crate::matching::matcher::JobMatcher;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-user profiles and applications. Redis or in-memory.
    pub profiles: Arc<dyn ProfileStore>,
    /// Job postings. Postgres or the built-in sample set.
    pub jobs: Arc<dyn JobSource>,
    /// Built once from `MATCH_WEIGHTING`.
    pub matcher: Arc<dyn JobMatcher>,
    pub config: Config,
}
