//! Quiz API handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};

use crate::http::error::{ApiError, ApiResult};
use crate::http::messages::{
    AnswersRequest, HealthResponse, QuestionsQuery, RegisterRequest, RegisterResponse,
};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::quiz::PublicQuestion;

/// `POST /quizzes/participant`
pub async fn register_participant(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let Json(request) = body.map_err(|e| {
        tracing::warn!(error = %e, "Error decoding request body");
        ApiError::bad_request(e.body_text())
    })?;

    if request.id.is_empty() {
        tracing::warn!("Missing participant ID");
        return Err(ApiError::bad_request("Participant ID is required"));
    }

    let session = state.registry.get(&request.quiz_id)?;
    session.add_participant(&request.id)?;
    metrics::record_registration(session.id());

    tracing::info!(
        participant_id = %request.id,
        quiz_id = %session.id(),
        "Participant registered"
    );
    state.leaderboard.publish(&session);

    Ok(Json(RegisterResponse {
        message: "Participant registered successfully".to_string(),
        participant_id: request.id,
        quiz_id: session.id().to_string(),
    }))
}

/// `GET /quizzes/questions?id=..&quiz_id=..`
pub async fn get_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> ApiResult<Json<Vec<PublicQuestion>>> {
    tracing::debug!(participant_id = %query.id, quiz_id = %query.quiz_id, "Questions requested");

    let session = state.registry.get(&query.quiz_id)?;
    session.participant(&query.id)?;

    state.leaderboard.publish(&session);

    Ok(Json(session.public_questions()))
}

/// `POST /quizzes/answers`
pub async fn submit_answers(
    State(state): State<AppState>,
    body: Result<Json<AnswersRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<String>>> {
    let Json(request) = body.map_err(|e| {
        tracing::warn!(error = %e, "Error decoding request body");
        ApiError::bad_request(e.body_text())
    })?;

    let session = state.registry.get(&request.quiz_id)?;
    let participant = session.participant(&request.id)?;

    // Reject the whole batch before recording any of it.
    for question_id in request.answers.keys() {
        session.question(question_id)?;
    }

    for (question_id, answer) in &request.answers {
        let correct = session.submit_answer(&participant.id, question_id, answer)?;
        tracing::debug!(
            participant_id = %participant.id,
            question_id = %question_id,
            correct,
            "Answer recorded"
        );
    }

    state.leaderboard.publish(&session);

    Ok(Json(vec!["Answer submitted successfully!".to_string()]))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
