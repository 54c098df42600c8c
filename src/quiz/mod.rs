//! Quiz sessions, participants and scoring.
//!
//! # Data Flow
//! ```text
//! config.quizzes
//!     → registry.rs (SessionRegistry, quiz_id → Arc<QuizSession>)
//!     → session.rs (participants, answers, scores)
//!     → leaderboard (sorted snapshot) → broadcast to sockets
//! ```
//!
//! # Design Decisions
//! - Registry is a concurrent map; sessions are shared via Arc
//! - Each session locks its participants only for short synchronous sections
//! - Questions are immutable once a session is created
//! - Correct answers never leave this module except through `Question`

pub mod registry;
pub mod session;
pub mod types;

pub use registry::SessionRegistry;
pub use session::QuizSession;
pub use types::{LeaderboardEntry, ParticipantRecord, PublicQuestion, Question, QuizError};
