//! GoodKarma Triage API
//!
//! JSON-over-HTTP surface for the triage questionnaire:
//! - `POST /start-session` creates a session and returns the first question
//! - `POST /submit-answer` records an answer and returns the next question
//! - `POST /reset-session/{session_id}` drops a session
//! - `GET /get-answers/{session_id}` lists answers in submission order

mod cors;
mod error;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::sessions::{
    AnswerInfo, AnswerRequest, AnswersResponse, NextQuestionResponse, QuestionInfo,
    ResetResponse, StartSessionRequest,
};
pub use state::AppState;

use axum::middleware;
use axum::Router;
use goodkarma_core::{Config, Result};
use tokio::net::TcpListener;

/// Build the application router
pub fn router(state: AppState) -> Router {
    routes::routes()
        .layer(middleware::from_fn_with_state(state.clone(), cors::cors))
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let listener = TcpListener::bind(config.bind_address).await?;
    let state = AppState::new(config);

    tracing::info!(
        address = %listener.local_addr()?,
        strict_question_order = state.config().strict_question_order,
        "GoodKarma triage API listening"
    );

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let discarded = state.sessions().session_count()?;
    tracing::info!(discarded, "Server stopped, in-memory sessions discarded");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
