//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the quiz server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Base path the frontend is mounted under when nothing else is configured.
///
/// Taken from `QUIZ_BASE_URL` at build time, `/` otherwise.
pub const DEFAULT_BASE_URL: &str = match option_env!("QUIZ_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Root configuration for the quiz server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Frontend routing settings.
    pub frontend: FrontendConfig,

    /// Cross-origin settings for the browser frontend.
    pub cors: CorsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Quizzes available at startup.
    pub quizzes: Vec<QuizConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            frontend: FrontendConfig::default(),
            cors: CorsConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            quizzes: vec![QuizConfig::sample()],
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9090").
    pub bind_address: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9090".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Frontend routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Base path for history-mode routing (e.g., "/" or "/app/").
    pub base_url: String,

    /// Page title used in the application shell.
    pub title: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            title: "Quiz".to_string(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API.
    pub allowed_origins: Vec<String>,

    /// Allowed HTTP methods.
    pub allowed_methods: Vec<String>,

    /// Allowed request headers.
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: vec!["content-type".to_string()],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Grace period for draining connections on shutdown, in seconds.
    pub shutdown_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9100".to_string(),
        }
    }
}

/// A quiz and its questions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Quiz identifier participants join with.
    pub id: String,

    /// Questions in presentation order.
    #[serde(default)]
    pub questions: Vec<QuestionConfig>,
}

impl QuizConfig {
    /// The quiz served when no quizzes are configured.
    pub fn sample() -> Self {
        Self {
            id: "quiz-01".to_string(),
            questions: vec![
                QuestionConfig {
                    id: "question-1".to_string(),
                    text: "What is the capital of France?".to_string(),
                    options: vec!["Paris".into(), "London".into(), "Berlin".into()],
                    correct: "Paris".to_string(),
                },
                QuestionConfig {
                    id: "question-2".to_string(),
                    text: "What is the largest planet in our solar system?".to_string(),
                    options: vec!["Earth".into(), "Saturn".into(), "Jupiter".into()],
                    correct: "Jupiter".to_string(),
                },
            ],
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionConfig {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Must be one of `options`.
    pub correct: String,
}
