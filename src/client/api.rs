//! HTTP client for the quiz API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::client::error::ClientError;
use crate::http::messages::{AnswersRequest, QuestionsQuery, RegisterRequest, RegisterResponse};
use crate::quiz::PublicQuestion;

/// Thin typed wrapper over the quiz service's REST endpoints.
#[derive(Debug, Clone)]
pub struct QuizClient {
    client: Client,
    base: Url,
}

impl QuizClient {
    /// Create a client for the service at `server_url` (e.g. `http://localhost:9090`).
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(server_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// WebSocket URL of the live leaderboard.
    pub fn leaderboard_url(&self) -> Result<Url, ClientError> {
        let mut url = self.base.join("ws")?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        // http → ws and https → wss are always permitted.
        let _ = url.set_scheme(scheme);
        Ok(url)
    }

    /// Register a participant for a quiz.
    pub async fn register(
        &self,
        participant_id: &str,
        quiz_id: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let body = RegisterRequest {
            id: participant_id.to_string(),
            quiz_id: quiz_id.to_string(),
        };
        let res = self
            .client
            .post(self.base.join("quizzes/participant")?)
            .json(&body)
            .send()
            .await?;
        decode(res).await
    }

    /// Fetch the quiz's questions (without answers).
    pub async fn questions(
        &self,
        participant_id: &str,
        quiz_id: &str,
    ) -> Result<Vec<PublicQuestion>, ClientError> {
        let query = QuestionsQuery {
            id: participant_id.to_string(),
            quiz_id: quiz_id.to_string(),
        };
        let res = self
            .client
            .get(self.base.join("quizzes/questions")?)
            .query(&query)
            .send()
            .await?;
        decode(res).await
    }

    /// Submit answers, question_id → chosen option.
    pub async fn submit_answers(
        &self,
        participant_id: &str,
        quiz_id: &str,
        answers: HashMap<String, String>,
    ) -> Result<Vec<String>, ClientError> {
        let body = AnswersRequest {
            id: participant_id.to_string(),
            quiz_id: quiz_id.to_string(),
            answers,
        };
        let res = self
            .client
            .post(self.base.join("quizzes/answers")?)
            .json(&body)
            .send()
            .await?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(text);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
