//! Integration tests for the quiz API.

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use quiz_app::client::{LeaderboardFeed, QuizClient};
use quiz_app::config::AppConfig;
use quiz_app::http::messages::ServerEvent;

mod common;

#[tokio::test]
async fn test_register_participant() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/quizzes/participant", server.url()))
        .json(&json!({"ID": "alice", "QUIZ_ID": "quiz-01"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Participant registered successfully",
            "participant_id": "alice",
            "quiz_id": "quiz-01"
        })
    );
}

#[tokio::test]
async fn test_register_rejections() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();
    let url = format!("{}/quizzes/participant", server.url());

    let missing_id = client
        .post(&url)
        .json(&json!({"quiz_id": "quiz-01"}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);

    let unknown_quiz = client
        .post(&url)
        .json(&json!({"id": "alice", "quiz_id": "quiz-99"}))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_quiz.status(), StatusCode::NOT_FOUND);
    let body: Value = unknown_quiz.json().await.unwrap();
    assert_eq!(body["error"]["status"], 404);

    let malformed = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    let first = client
        .post(&url)
        .json(&json!({"id": "alice", "quiz_id": "quiz-01"}))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let duplicate = client
        .post(&url)
        .json(&json!({"id": "alice", "quiz_id": "quiz-01"}))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_questions_hide_correct_answers() {
    let server = common::start_server().await;
    let api = QuizClient::new(&server.url()).unwrap();
    api.register("alice", "quiz-01").await.unwrap();

    let res = reqwest::get(format!(
        "{}/quizzes/questions?id=alice&quiz_id=quiz-01",
        server.url()
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for q in questions {
        assert!(q.get("correct").is_none());
        assert_eq!(q["options"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn test_questions_for_unknown_participant() {
    let server = common::start_server().await;
    let api = QuizClient::new(&server.url()).unwrap();

    let err = api.questions("ghost", "quiz-01").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("ghost"));
}

#[tokio::test]
async fn test_submit_answers() {
    let server = common::start_server().await;
    let api = QuizClient::new(&server.url()).unwrap();
    api.register("alice", "quiz-01").await.unwrap();

    let res = api
        .submit_answers(
            "alice",
            "quiz-01",
            [("question-1".to_string(), "Paris".to_string())].into(),
        )
        .await
        .unwrap();
    assert_eq!(res, vec!["Answer submitted successfully!".to_string()]);

    let err = api
        .submit_answers(
            "alice",
            "quiz-01",
            [("question-9".to_string(), "Paris".to_string())].into(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_rejected_batch_records_nothing() {
    let server = common::start_server().await;
    let api = QuizClient::new(&server.url()).unwrap();

    let mut feed = LeaderboardFeed::connect(&api.leaderboard_url().unwrap())
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    api.register("alice", "quiz-01").await.unwrap();
    api.submit_answers(
        "alice",
        "quiz-01",
        [("question-1".to_string(), "Paris".to_string())].into(),
    )
    .await
    .unwrap();

    // One valid answer, one unknown question: nothing is recorded.
    let err = api
        .submit_answers(
            "alice",
            "quiz-01",
            [
                ("question-2".to_string(), "Jupiter".to_string()),
                ("question-9".to_string(), "Paris".to_string()),
            ]
            .into(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));

    // Fetching questions republishes the leaderboard.
    api.questions("alice", "quiz-01").await.unwrap();

    let last = tokio::time::timeout(Duration::from_secs(5), async {
        let mut seen = 0;
        loop {
            let event = feed.next_event().await.unwrap().unwrap();
            seen += 1;
            if seen == 3 {
                return event;
            }
        }
    })
    .await
    .expect("leaderboard events");

    let ServerEvent::ScoreLeaderboard { data, .. } = last;
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].id, "alice");
    assert_eq!(data[0].score, 1);

    feed.close().await.unwrap();
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = AppConfig::default();
    config.listener.max_body_bytes = 64;
    let server = common::start_server_with(config).await;

    let res = reqwest::Client::new()
        .post(format!("{}/quizzes/participant", server.url()))
        .header("origin", "http://localhost:5173")
        .json(&json!({"id": "a".repeat(256), "quiz_id": "quiz-01"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_leaderboard_broadcast() {
    let server = common::start_server().await;
    let api = QuizClient::new(&server.url()).unwrap();

    let mut feed = LeaderboardFeed::connect(&api.leaderboard_url().unwrap())
        .await
        .unwrap();
    // Let the server subscribe the socket before publishing.
    tokio::time::sleep(Duration::from_millis(100)).await;

    api.register("alice", "quiz-01").await.unwrap();
    api.register("bob", "quiz-01").await.unwrap();
    api.submit_answers(
        "bob",
        "quiz-01",
        [
            ("question-1".to_string(), "Paris".to_string()),
            ("question-2".to_string(), "Jupiter".to_string()),
        ]
        .into(),
    )
    .await
    .unwrap();

    let last = tokio::time::timeout(Duration::from_secs(5), async {
        let mut seen = 0;
        loop {
            let event = feed.next_event().await.unwrap().unwrap();
            seen += 1;
            if seen == 3 {
                return event;
            }
        }
    })
    .await
    .expect("leaderboard events");

    let ServerEvent::ScoreLeaderboard { quiz_id, data } = last;
    assert_eq!(quiz_id, "quiz-01");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].id, "bob");
    assert_eq!(data[0].score, 2);
    assert_eq!(data[1].id, "alice");
    assert_eq!(data[1].score, 0);

    feed.close().await.unwrap();
}

#[tokio::test]
async fn test_request_id_and_health() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let res = client
        .get(format!("{}/health", server.url()))
        .header("x-request-id", "given-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "given-id");
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = common::start_server().await;
    let client = reqwest::Client::new();

    let res = client
        .request(Method::OPTIONS, format!("{}/quizzes/participant", server.url()))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );

    let res = client
        .request(Method::OPTIONS, format!("{}/quizzes/participant", server.url()))
        .header("origin", "http://evil.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(!res.headers().contains_key("access-control-allow-origin"));
}
