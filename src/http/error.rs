//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::quiz::QuizError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request.
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Quiz(QuizError::SessionNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Quiz(QuizError::ParticipantNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Quiz(QuizError::DuplicateParticipant(_)) => StatusCode::CONFLICT,
            ApiError::Quiz(QuizError::QuestionNotFound(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "status": status.as_u16(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(QuizError::SessionNotFound("q".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(QuizError::DuplicateParticipant("a".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(QuizError::QuestionNotFound("q9".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = ApiError::from(QuizError::ParticipantNotFound("bob".into()));
        assert_eq!(err.to_string(), "participant \"bob\" not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
