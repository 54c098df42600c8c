//! Live leaderboard over WebSocket.
//!
//! # Responsibilities
//! - Upgrade `/ws` requests
//! - Fan out leaderboard events to every connected socket
//! - Drain (and log) whatever clients send
//!
//! # Data Flow
//! ```text
//! handlers (register / questions / answers)
//!     → LeaderboardHub::publish (broadcast channel)
//!     → one send task per socket → client
//! ```
//!
//! # Design Decisions
//! - Broadcast channel: a slow socket skips missed events instead of blocking others
//! - Sockets close when the server shuts down

use axum::{
    extract::{
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::http::messages::ServerEvent;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::quiz::QuizSession;

/// Broadcast point for leaderboard updates.
#[derive(Clone)]
pub struct LeaderboardHub {
    tx: broadcast::Sender<ServerEvent>,
}

impl LeaderboardHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Send the session's current leaderboard to all sockets.
    pub fn publish(&self, session: &QuizSession) {
        let data = session.leaderboard();
        tracing::debug!(
            quiz_id = %session.id(),
            participants = data.len(),
            sockets = self.tx.receiver_count(),
            "Publishing leaderboard"
        );
        // No receivers is not an error: nobody is watching yet.
        let _ = self.tx.send(ServerEvent::ScoreLeaderboard {
            quiz_id: session.id().to_string(),
            data,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }

    pub fn socket_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for LeaderboardHub {
    fn default() -> Self {
        Self::new(64)
    }
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(stream: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = stream.split();
    let mut rx = state.leaderboard.subscribe();
    let mut shutdown = state.shutdown.subscribe();

    let socket_id = Uuid::new_v4();
    metrics::ws_connected();
    tracing::info!(
        socket_id = %socket_id,
        sockets = state.leaderboard.socket_count(),
        "Leaderboard socket connected"
    );

    // task: send leaderboard events to this client
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = match rx.recv().await {
                Ok(event) => event,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(socket_id = %socket_id, skipped, "Leaderboard socket lagging");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };
            let json = match serde_json::to_string(&event) {
                Ok(j) => j,
                Err(_) => continue,
            };
            if sender
                .send(Message::Text(Utf8Bytes::from(json)))
                .await
                .is_err()
            {
                break;
            }
        }
        let _ = sender.send(Message::Close(None)).await;
    });

    // task: drain client messages
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    tracing::debug!(socket_id = %socket_id, text = %text.as_str(), "Received text message")
                }
                Message::Binary(bytes) => {
                    tracing::debug!(socket_id = %socket_id, len = bytes.len(), "Received binary message")
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
        _ = shutdown.recv() => {
            recv_task.abort();
            send_task.abort();
        }
    }

    metrics::ws_disconnected();
    tracing::info!(socket_id = %socket_id, "Leaderboard socket closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let hub = LeaderboardHub::new(8);
        let mut rx = hub.subscribe();

        let session = QuizSession::new("quiz-01", Vec::new());
        session.add_participant("alice").unwrap();
        hub.publish(&session);

        let ServerEvent::ScoreLeaderboard { quiz_id, data } = rx.recv().await.unwrap();
        assert_eq!(quiz_id, "quiz-01");
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, "alice");
    }

    #[test]
    fn test_publish_without_sockets() {
        let hub = LeaderboardHub::default();
        hub.publish(&QuizSession::new("quiz-01", Vec::new()));
        assert_eq!(hub.socket_count(), 0);
    }
}
