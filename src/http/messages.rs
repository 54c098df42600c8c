//! Request and response bodies of the quiz API.
//!
//! Shared by the server handlers and the client so both sides agree on the
//! wire format. Field aliases accept the upper-case keys older frontends send.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::quiz::LeaderboardEntry;
use crate::store::Participant;

/// Body of `POST /quizzes/participant`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "QUIZ_ID")]
    pub quiz_id: String,
}

/// Response of `POST /quizzes/participant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub participant_id: String,
    pub quiz_id: String,
}

impl RegisterResponse {
    /// The registered identity, in the shape the participant store holds.
    pub fn participant(&self) -> Participant {
        Participant::new(self.participant_id.clone(), self.quiz_id.clone())
    }
}

/// Query of `GET /quizzes/questions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsQuery {
    pub id: String,
    pub quiz_id: String,
}

/// Body of `POST /quizzes/answers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersRequest {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "QUIZ_ID")]
    pub quiz_id: String,
    /// question_id → chosen option
    #[serde(alias = "Answer", alias = "answer")]
    pub answers: HashMap<String, String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Events pushed to every leaderboard socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "scoreLeaderboard")]
    ScoreLeaderboard {
        quiz_id: String,
        data: Vec<LeaderboardEntry>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_upper_case_keys() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"ID": "alice", "QUIZ_ID": "quiz-01"}"#).unwrap();
        assert_eq!(req.id, "alice");
        assert_eq!(req.quiz_id, "quiz-01");

        let req: RegisterRequest = serde_json::from_str(r#"{"quiz_id": "quiz-01"}"#).unwrap();
        assert!(req.id.is_empty());
    }

    #[test]
    fn test_answers_request_aliases() {
        let req: AnswersRequest = serde_json::from_str(
            r#"{"ID": "alice", "QUIZ_ID": "quiz-01", "Answer": {"question-1": "Paris"}}"#,
        )
        .unwrap();
        assert_eq!(req.answers.get("question-1").map(String::as_str), Some("Paris"));
    }

    #[test]
    fn test_leaderboard_event_shape() {
        let event = ServerEvent::ScoreLeaderboard {
            quiz_id: "quiz-01".into(),
            data: vec![LeaderboardEntry {
                id: "alice".into(),
                score: 2,
            }],
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "type": "scoreLeaderboard",
                "quiz_id": "quiz-01",
                "data": [{"id": "alice", "score": 2}]
            })
        );
    }
}
