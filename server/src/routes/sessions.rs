//! Session endpoints
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use goodkarma_core::{Advance, Answer, Question, UserInfo, COMPLETION_MESSAGE};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub session_id: String,
    #[serde(flatten)]
    pub user_info: UserInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionInfo {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl From<Question> for QuestionInfo {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: question.options,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NextQuestionResponse {
    #[serde(rename = "nextQuestion")]
    pub next_question: Option<QuestionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NextQuestionResponse {
    fn question(question: Question) -> Self {
        Self {
            next_question: Some(question.into()),
            message: None,
        }
    }

    fn completed() -> Self {
        Self {
            next_question: None,
            message: Some(COMPLETION_MESSAGE.to_string()),
        }
    }
}

impl From<Advance> for NextQuestionResponse {
    fn from(advance: Advance) -> Self {
        match advance {
            Advance::Next(question) => Self::question(question),
            Advance::Complete => Self::completed(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerInfo {
    pub question_id: i64,
    pub answer: String,
}

impl From<Answer> for AnswerInfo {
    fn from(answer: Answer) -> Self {
        Self {
            question_id: answer.question_id,
            answer: answer.answer,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswersResponse {
    pub answers: Vec<AnswerInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
}

pub async fn start_session(
    State(state): State<AppState>,
    payload: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Result<Json<NextQuestionResponse>, ApiError> {
    let Json(request) = payload?;
    let first = state
        .sessions()
        .start(&request.session_id, request.user_info)?;
    Ok(Json(NextQuestionResponse::question(first)))
}

pub async fn submit_answer(
    State(state): State<AppState>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<NextQuestionResponse>, ApiError> {
    let Json(request) = payload?;
    let advance =
        state
            .sessions()
            .submit(&request.session_id, request.question_id, request.answer)?;
    Ok(Json(advance.into()))
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ResetResponse>, ApiError> {
    state.sessions().reset(&session_id)?;
    Ok(Json(ResetResponse {
        status: "reset".to_string(),
    }))
}

pub async fn get_answers(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<AnswersResponse>, ApiError> {
    let answers = state.sessions().answers(&session_id)?;
    Ok(Json(AnswersResponse {
        answers: answers.into_iter().map(AnswerInfo::from).collect(),
    }))
}
