//! Client side of the quiz: API client, leaderboard feed and the headless frontend.
//!
//! # Data Flow
//! ```text
//! FrontendApp::join
//!     → api.rs (POST /quizzes/participant)
//!     → store (set_participant) → history (push /quiz)
//!
//! FrontendApp::load_questions / answer
//!     → store (participant_info) → api.rs
//!
//! LeaderboardFeed (GET /ws) → ServerEvent stream
//! ```

pub mod api;
pub mod app;
pub mod error;
pub mod leaderboard;

pub use api::QuizClient;
pub use app::FrontendApp;
pub use error::ClientError;
pub use leaderboard::LeaderboardFeed;
