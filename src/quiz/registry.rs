//! Registry of live quiz sessions.

use dashmap::DashMap;
use std::sync::Arc;

use crate::config::QuizConfig;
use crate::quiz::session::QuizSession;
use crate::quiz::types::{Question, QuizError};

/// A thread-safe map of quiz id → session.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<DashMap<String, Arc<QuizSession>>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with one session per configured quiz.
    pub fn from_config(quizzes: &[QuizConfig]) -> Self {
        let registry = Self::new();
        for quiz in quizzes {
            let questions = quiz
                .questions
                .iter()
                .map(|q| Question {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                    correct: q.correct.clone(),
                })
                .collect();
            registry.insert(QuizSession::new(quiz.id.clone(), questions));
        }
        registry
    }

    /// Add (or replace) a session.
    pub fn insert(&self, session: QuizSession) -> Arc<QuizSession> {
        let session = Arc::new(session);
        tracing::info!(
            quiz_id = %session.id(),
            questions = session.questions().len(),
            "Quiz session registered"
        );
        self.inner.insert(session.id().to_string(), session.clone());
        session
    }

    /// Look up a session by quiz id.
    pub fn get(&self, quiz_id: &str) -> Result<Arc<QuizSession>, QuizError> {
        self.inner
            .get(quiz_id)
            .map(|r| r.value().clone())
            .ok_or_else(|| QuizError::SessionNotFound(quiz_id.to_string()))
    }

    /// Ids of all sessions, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
