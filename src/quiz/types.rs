//! Quiz domain types and error definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A quiz question with its correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct: String,
}

/// A question as shown to participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

/// Server-side state of one registered participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParticipantRecord {
    pub id: String,
    pub score: u32,
    /// question_id → submitted answer
    pub answers: HashMap<String, String>,
}

impl ParticipantRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// One row of the score leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub score: u32,
}

/// Errors that can occur during quiz operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz session {0:?} not found")]
    SessionNotFound(String),

    #[error("participant {0:?} not found")]
    ParticipantNotFound(String),

    #[error("participant {0:?} already exists")]
    DuplicateParticipant(String),

    #[error("question {0:?} not found")]
    QuestionNotFound(String),
}
