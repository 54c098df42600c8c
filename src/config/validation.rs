//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check quiz definitions are playable (unique ids, correct answer offered)
//! - Validate value ranges (timeouts > 0, base path shape)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBaseUrl(String),
    ZeroTimeout,
    EmptyQuizId,
    DuplicateQuizId(String),
    DuplicateQuestionId { quiz: String, question: String },
    CorrectAnswerNotInOptions { quiz: String, question: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(base) => {
                write!(f, "frontend.base_url must start with '/': {:?}", base)
            }
            ValidationError::ZeroTimeout => write!(f, "timeouts.request_secs must be > 0"),
            ValidationError::EmptyQuizId => write!(f, "quiz id must not be empty"),
            ValidationError::DuplicateQuizId(id) => write!(f, "duplicate quiz id {:?}", id),
            ValidationError::DuplicateQuestionId { quiz, question } => {
                write!(f, "duplicate question id {:?} in quiz {:?}", question, quiz)
            }
            ValidationError::CorrectAnswerNotInOptions { quiz, question } => write!(
                f,
                "correct answer of question {:?} in quiz {:?} is not one of its options",
                question, quiz
            ),
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.frontend.base_url.starts_with('/') {
        errors.push(ValidationError::InvalidBaseUrl(config.frontend.base_url.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut quiz_ids = HashSet::new();
    for quiz in &config.quizzes {
        if quiz.id.is_empty() {
            errors.push(ValidationError::EmptyQuizId);
        } else if !quiz_ids.insert(quiz.id.as_str()) {
            errors.push(ValidationError::DuplicateQuizId(quiz.id.clone()));
        }

        let mut question_ids = HashSet::new();
        for question in &quiz.questions {
            if !question_ids.insert(question.id.as_str()) {
                errors.push(ValidationError::DuplicateQuestionId {
                    quiz: quiz.id.clone(),
                    question: question.id.clone(),
                });
            }
            if !question.options.contains(&question.correct) {
                errors.push(ValidationError::CorrectAnswerNotInOptions {
                    quiz: quiz.id.clone(),
                    question: question.id.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{QuestionConfig, QuizConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.frontend.base_url = "app".into();
        config.timeouts.request_secs = 0;
        config.quizzes.push(QuizConfig::sample());
        config.quizzes.push(QuizConfig {
            id: String::new(),
            questions: vec![
                QuestionConfig {
                    id: "q".into(),
                    text: "?".into(),
                    options: vec!["a".into()],
                    correct: "b".into(),
                },
                QuestionConfig {
                    id: "q".into(),
                    text: "?".into(),
                    options: vec!["a".into()],
                    correct: "a".into(),
                },
            ],
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBaseUrl("app".into()),
                ValidationError::ZeroTimeout,
                ValidationError::DuplicateQuizId("quiz-01".into()),
                ValidationError::EmptyQuizId,
                ValidationError::CorrectAnswerNotInOptions {
                    quiz: String::new(),
                    question: "q".into()
                },
                ValidationError::DuplicateQuestionId {
                    quiz: String::new(),
                    question: "q".into()
                },
            ]
        );
    }
}
