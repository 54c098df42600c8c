//! Headless frontend: routes, history and participant store wired to the API.
//!
//! # Responsibilities
//! - Own the application context (no globals)
//! - Join: register, remember the participant, navigate to the quiz view
//! - Quiz: load questions and submit answers as the stored participant
//!
//! # Design Decisions
//! - Views read the store through `&self`; only `join` mutates it
//! - No navigation guards: any view can be shown at any time

use std::collections::HashMap;

use crate::client::api::QuizClient;
use crate::client::error::ClientError;
use crate::quiz::PublicQuestion;
use crate::routing::{History, Resolution, RouteTable, View};
use crate::store::{Participant, ParticipantStore};

/// One running instance of the quiz frontend.
pub struct FrontendApp {
    routes: RouteTable,
    history: History,
    store: ParticipantStore,
    api: QuizClient,
}

impl FrontendApp {
    /// Start the application at the base URL with an empty store.
    pub fn new(api: QuizClient, base_url: &str) -> Self {
        Self {
            routes: RouteTable::new(base_url),
            history: History::new(base_url),
            store: ParticipantStore::new(),
            api,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &ParticipantStore {
        &self.store
    }

    pub fn api(&self) -> &QuizClient {
        &self.api
    }

    /// Resolution of the current location.
    pub fn current(&self) -> Resolution<'_> {
        self.history.current(&self.routes)
    }

    /// View being displayed, `None` on the not-found page.
    pub fn current_view(&self) -> Option<View> {
        self.current().view()
    }

    /// Navigate to an app-relative path.
    pub fn navigate(&mut self, to: &str) {
        self.history.push(to);
    }

    /// Register for a quiz and switch to the quiz view.
    pub async fn join(
        &mut self,
        participant_id: &str,
        quiz_id: &str,
    ) -> Result<&Participant, ClientError> {
        let response = self.api.register(participant_id, quiz_id).await?;
        self.store.set_participant(&response.participant());

        let quiz = self.routes.route_for(View::Quiz).path;
        self.history.push(quiz);

        tracing::info!(
            participant_id = %participant_id,
            quiz_id = %quiz_id,
            location = %self.history.location(),
            "Joined quiz"
        );
        Ok(self.store.participant_info())
    }

    /// Questions for the stored participant's quiz.
    pub async fn load_questions(&self) -> Result<Vec<PublicQuestion>, ClientError> {
        let participant = self.joined()?;
        self.api
            .questions(&participant.participant_id, &participant.quiz_id)
            .await
    }

    /// Submit answers as the stored participant.
    pub async fn answer(
        &self,
        answers: HashMap<String, String>,
    ) -> Result<Vec<String>, ClientError> {
        let participant = self.joined()?;
        self.api
            .submit_answers(&participant.participant_id, &participant.quiz_id, answers)
            .await
    }

    fn joined(&self) -> Result<&Participant, ClientError> {
        if !self.store.participant_exists() {
            return Err(ClientError::NotJoined);
        }
        Ok(self.store.participant_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> FrontendApp {
        FrontendApp::new(QuizClient::new("http://127.0.0.1:9").unwrap(), "/")
    }

    #[test]
    fn test_starts_on_join_view_with_empty_store() {
        let app = app();
        assert_eq!(app.current_view(), Some(View::Join));
        assert!(!app.store().participant_exists());
    }

    #[test]
    fn test_navigate() {
        let mut app = app();
        app.navigate("/quiz");
        assert_eq!(app.current_view(), Some(View::Quiz));

        app.navigate("/nowhere");
        assert_eq!(app.current_view(), None);
        assert_eq!(app.current().view_name(), "not-found");
    }

    #[test]
    fn test_relative_base_path() {
        let mut app = FrontendApp::new(QuizClient::new("http://127.0.0.1:9").unwrap(), "app");
        assert_eq!(app.history().location(), "/app/");
        assert_eq!(app.current_view(), Some(View::Join));

        app.navigate("/quiz");
        assert_eq!(app.history().location(), "/app/quiz");
        assert_eq!(app.current_view(), Some(View::Quiz));
    }

    #[tokio::test]
    async fn test_quiz_operations_require_join() {
        let app = app();
        assert!(matches!(app.load_questions().await, Err(ClientError::NotJoined)));
        assert!(matches!(
            app.answer(HashMap::new()).await,
            Err(ClientError::NotJoined)
        ));
    }
}
