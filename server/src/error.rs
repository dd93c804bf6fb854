//! Mapping from service errors to HTTP responses
//!
//! Error bodies use the `{"detail": "..."}` shape clients already parse.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use goodkarma_core::SessionError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Session(SessionError),
    /// The request body could not be read as the expected JSON
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Session(SessionError::AlreadyExists(_)) => {
                (StatusCode::BAD_REQUEST, "Session already exists".to_string())
            }
            ApiError::Session(SessionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Session not found".to_string())
            }
            ApiError::Session(
                e @ (SessionError::AlreadyComplete(_) | SessionError::QuestionMismatch { .. }),
            ) => (StatusCode::CONFLICT, e.to_string()),
            ApiError::Session(e @ (SessionError::EmptyCatalog | SessionError::Store(_))) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Rejected { status, detail } => (*status, detail.clone()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError::Session(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        } else {
            tracing::debug!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
