//! GoodKarma Core
//!
//! Shared configuration and logging for the triage service, plus re-exports
//! of the session and storage crates so the server depends on one place.

mod config;
mod error;

pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use goodkarma_session::{
    Advance, Answer, Question, QuestionCatalog, SessionError, SessionManager, SessionRecord,
    SessionState, UserInfo, ANSWER_OPTIONS, COMPLETION_MESSAGE,
};
pub use goodkarma_store::{MemoryStore, Store, StoreError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding)
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Build a session manager from configuration
pub fn session_manager(config: &Config) -> SessionManager {
    SessionManager::in_memory().with_strict_order(config.strict_question_order)
}
