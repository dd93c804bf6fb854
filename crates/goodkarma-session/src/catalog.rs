//! Triage question catalog
//!
//! Questions are numbered 1..=N by position and never change after startup.
//! Every question offers the same two options.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::SessionError;
use crate::Result;

pub const ANSWER_OPTIONS: [&str; 2] = ["Yes", "No"];

const TRIAGE_QUESTIONS: &[&str] = &[
    // Neurodivergence / sensory
    "Do you sometimes feel like you’re navigating a world that doesn’t always match how you think or feel—especially with social rules, routines, or sensory overload?",
    // Mood volatility
    "Do your moods or worries sometimes shift suddenly or feel too intense?",
    // Dissociation / identity
    "Do you ever feel disconnected from reality, unsure of who you are, or like your thoughts and experiences aren’t always grounded?",
    // Impulse / urge control
    "Do you sometimes feel like your urges or habits take over—food, sleep, substances, or acting impulsively?",
    // Body / sexual health
    "Are you feeling confused or frustrated with your body, gender, or sexual health?",
    // Personality patterns
    "Would you like to explore if your personality patterns might be affecting your wellbeing?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the catalog
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            options: ANSWER_OPTIONS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Arc<[Question]>,
}

impl QuestionCatalog {
    /// The built-in triage questionnaire
    pub fn triage() -> Self {
        Self::build(TRIAGE_QUESTIONS.iter().map(|t| t.to_string()))
    }

    /// Build a catalog from question texts, numbering them in order
    pub fn from_texts<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let catalog = Self::build(texts.into_iter().map(Into::into));
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        Ok(catalog)
    }

    fn build(texts: impl Iterator<Item = String>) -> Self {
        let questions: Vec<Question> = (1u32..)
            .zip(texts)
            .map(|(id, text)| Question::new(id, text))
            .collect();

        Self {
            questions: questions.into(),
        }
    }

    /// Look up a question by its 1-based id
    pub fn get(&self, id: u32) -> Option<&Question> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.questions.get(index)
    }

    pub fn first(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::triage()
    }
}
