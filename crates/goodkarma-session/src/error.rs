//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session already exists: {0}")]
    AlreadyExists(String),

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already completed: {0}")]
    AlreadyComplete(String),

    #[error("Expected an answer for question {expected}, got question {got}")]
    QuestionMismatch { expected: i64, got: i64 },

    #[error("Question catalog cannot be empty")]
    EmptyCatalog,

    #[error("Storage error: {0}")]
    Store(#[from] goodkarma_store::StoreError),
}
