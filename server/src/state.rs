//! Application state shared by every handler
use goodkarma_core::{Config, SessionManager};
use std::sync::Arc;

/// Cheap to clone; clones share the same session store
#[derive(Clone)]
pub struct AppState {
    sessions: SessionManager,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = goodkarma_core::session_manager(&config);

        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
