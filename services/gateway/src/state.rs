use crate::adapter::{InProcessEngine, MatchingEngine};
use crate::cache::SessionCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionCache>,
}

impl AppState {
    pub fn new(engine: Arc<dyn MatchingEngine>) -> Self {
        Self {
            sessions: Arc::new(SessionCache::new(engine)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InProcessEngine))
    }
}
