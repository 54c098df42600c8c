//! Subscription to the live leaderboard socket.

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::client::error::ClientError;
use crate::http::messages::ServerEvent;

/// Stream of leaderboard events from the server.
pub struct LeaderboardFeed {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl LeaderboardFeed {
    /// Connect to the leaderboard socket at `url` (`ws://host/ws`).
    pub async fn connect(url: &Url) -> Result<Self, ClientError> {
        let (stream, _) = tokio_tungstenite::connect_async(url.as_str()).await?;
        tracing::debug!(url = %url, "Leaderboard feed connected");
        Ok(Self { stream })
    }

    /// Next decoded event, or `None` once the server closes the socket.
    pub async fn next_event(&mut self) -> Option<Result<ServerEvent, ClientError>> {
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    return Some(serde_json::from_str(text.as_str()).map_err(ClientError::from));
                }
                Ok(Message::Close(_)) => return None,
                Ok(_) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
        None
    }

    /// Close the socket.
    pub async fn close(mut self) -> Result<(), ClientError> {
        self.stream.close(None).await?;
        Ok(())
    }
}
