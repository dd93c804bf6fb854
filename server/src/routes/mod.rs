//! HTTP routes
//!
//! Handlers translate JSON requests into session manager calls.
//! The session manager owns all state.

pub mod diagnostics;
pub mod sessions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/start-session", post(sessions::start_session))
        .route("/submit-answer", post(sessions::submit_answer))
        .route("/reset-session/{session_id}", post(sessions::reset_session))
        .route("/get-answers/{session_id}", get(sessions::get_answers))
        .route("/health", get(diagnostics::health))
}
