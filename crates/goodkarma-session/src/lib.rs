//! GoodKarma Session Management
//!
//! A session walks one client through the fixed triage catalog:
//! - Sessions are keyed by a client-supplied identifier
//! - Each accepted answer advances a server-side cursor by exactly one
//! - The next question is always derived from the cursor, never from the client
//! - Sessions live in process memory until reset

mod catalog;
mod error;
mod manager;
mod session;

pub use catalog::{Question, QuestionCatalog, ANSWER_OPTIONS};
pub use error::SessionError;
pub use manager::{Advance, SessionManager, COMPLETION_MESSAGE};
pub use session::{Answer, SessionRecord, SessionState, UserInfo};

pub type Result<T> = std::result::Result<T, SessionError>;
