//! A single quiz session.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::observability::metrics;
use crate::quiz::types::{LeaderboardEntry, ParticipantRecord, PublicQuestion, Question, QuizError};

/// A quiz session: fixed questions plus the participants playing it.
#[derive(Debug)]
pub struct QuizSession {
    id: String,
    questions: Vec<Question>,
    participants: RwLock<HashMap<String, ParticipantRecord>>,
}

impl QuizSession {
    /// Create a new session with no participants.
    pub fn new(id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            questions,
            participants: RwLock::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions with the correct answers removed.
    pub fn public_questions(&self) -> Vec<PublicQuestion> {
        self.questions.iter().map(PublicQuestion::from).collect()
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Result<&Question, QuizError> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| QuizError::QuestionNotFound(id.to_string()))
    }

    /// Id of the first question offering `answer` as an option.
    pub fn question_for_option(&self, answer: &str) -> Option<&str> {
        self.questions
            .iter()
            .find(|q| q.options.iter().any(|o| o == answer))
            .map(|q| q.id.as_str())
    }

    /// Register a participant with a zero score.
    pub fn add_participant(&self, id: &str) -> Result<(), QuizError> {
        let mut participants = self.participants.write().expect("participants lock poisoned");
        if participants.contains_key(id) {
            return Err(QuizError::DuplicateParticipant(id.to_string()));
        }
        participants.insert(id.to_string(), ParticipantRecord::new(id));
        Ok(())
    }

    /// Snapshot of a participant.
    pub fn participant(&self, id: &str) -> Result<ParticipantRecord, QuizError> {
        self.participants
            .read()
            .expect("participants lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| QuizError::ParticipantNotFound(id.to_string()))
    }

    pub fn participant_count(&self) -> usize {
        self.participants.read().expect("participants lock poisoned").len()
    }

    /// Record an answer and rescore the participant.
    ///
    /// A later answer to the same question replaces the earlier one. The score
    /// is the number of recorded answers that are correct.
    ///
    /// Returns whether this answer is correct.
    pub fn submit_answer(
        &self,
        participant_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<bool, QuizError> {
        let question = self.question(question_id)?;

        let mut participants = self.participants.write().expect("participants lock poisoned");
        let participant = participants
            .get_mut(participant_id)
            .ok_or_else(|| QuizError::ParticipantNotFound(participant_id.to_string()))?;

        participant
            .answers
            .insert(question_id.to_string(), answer.to_string());
        participant.score = self.score(&participant.answers);

        let correct = question.correct == answer;
        metrics::record_answer(&self.id, correct);
        Ok(correct)
    }

    /// Participants sorted by score (descending), ties broken by id.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let participants = self.participants.read().expect("participants lock poisoned");
        let mut entries: Vec<LeaderboardEntry> = participants
            .values()
            .map(|p| LeaderboardEntry {
                id: p.id.clone(),
                score: p.score,
            })
            .collect();
        drop(participants);

        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        entries
    }

    fn score(&self, answers: &HashMap<String, String>) -> u32 {
        self.questions
            .iter()
            .filter(|q| answers.get(&q.id).is_some_and(|a| *a == q.correct))
            .count() as u32
    }
}
