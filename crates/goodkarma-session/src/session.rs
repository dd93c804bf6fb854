//! Session record and its progress state machine
//!
//! ```text
//! Active(0)
//!   ↓ answer
//! Active(k)        0 <= k < N
//!   ↓ answer
//! Complete         k >= N
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Demographic details captured when the session starts. Stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub age: i64,
    pub gender: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub known_illnesses: Option<String>,
    #[serde(default)]
    pub active_medicines: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Question id as reported by the client
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `answered` questions done, more to go
    Active { answered: usize },
    Complete,
}

impl SessionState {
    pub fn from_progress(question_index: usize, total: usize) -> Self {
        if question_index >= total {
            SessionState::Complete
        } else {
            SessionState::Active {
                answered: question_index,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SessionState::Complete)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Active { answered } => write!(f, "active({answered})"),
            SessionState::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Client-supplied identifier
    pub id: String,
    pub user_info: UserInfo,
    /// Number of answers received so far
    pub question_index: usize,
    /// Answers in submission order
    pub answers: Vec<Answer>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(id: String, user_info: UserInfo) -> Self {
        let now = Utc::now();

        Self {
            id,
            user_info,
            question_index: 0,
            answers: Vec::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Id of the question the server expects next
    pub fn next_question_id(&self) -> i64 {
        i64::try_from(self.question_index + 1).unwrap_or(i64::MAX)
    }

    pub fn state(&self, total: usize) -> SessionState {
        SessionState::from_progress(self.question_index, total)
    }

    /// Append an answer and advance the cursor by one
    pub fn record_answer(&mut self, question_id: i64, answer: String) {
        self.answers.push(Answer {
            question_id,
            answer,
        });
        self.question_index += 1;
        self.updated_at = Utc::now();
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
