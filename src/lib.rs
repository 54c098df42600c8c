//! Live Quiz Library
//!
//! Frontend core (route table, participant store), the quiz service behind it,
//! and a headless client that drives both.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod quiz;
pub mod routing;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteTable, View};
pub use store::{Participant, ParticipantStore};
