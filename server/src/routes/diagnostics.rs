use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub sessions: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthInfo>, ApiError> {
    let sessions = state.sessions().session_count()?;
    Ok(Json(HealthInfo {
        status: "ok".to_string(),
        sessions,
    }))
}
