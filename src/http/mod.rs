//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → handlers.rs (quiz API) | websocket.rs (leaderboard) | frontend.rs (app shell)
//!     → error.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod frontend;
pub mod handlers;
pub mod messages;
pub mod request;
pub mod server;
pub mod websocket;

pub use error::{ApiError, ApiResult};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
