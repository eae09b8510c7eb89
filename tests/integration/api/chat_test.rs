//! JSON submission tests (POST /api/chat)

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use souvenir::shared::{ChatPayload, RealtimeEvent};
use tokio::sync::broadcast::error::TryRecvError;

use crate::common::TestApp;

#[tokio::test]
async fn test_valid_submission_is_stored_and_broadcast() {
    let app = TestApp::spawn().await;
    let mut events = app.state.realtime_broadcast.subscribe();

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "prenom": "Lea", "filiaire": "Info", "commentaire": "Bonjour" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "ok": true }));
    assert_eq!(app.rows().await, 1);

    let expected = RealtimeEvent::ChatNew(ChatPayload {
        prenom: "Lea".to_string(),
        filiaire: "Info".to_string(),
        commentaire: "Bonjour".to_string(),
    });
    assert_eq!(events.try_recv().unwrap(), expected);
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_empty_field_is_rejected() {
    let app = TestApp::spawn().await;
    let mut events = app.state.realtime_broadcast.subscribe();

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "prenom": "Lea", "filiaire": "", "commentaire": "Bonjour" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "ok": false, "error": "Tous les champs sont requis." })
    );
    assert_eq!(app.rows().await, 0);
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_whitespace_only_field_is_rejected() {
    let app = TestApp::spawn().await;

    let status = app.submit("Lea", "Info", "   \n\t ").await;

    assert_eq!(status, 400);
    assert_eq!(app.rows().await, 0);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "prenom": "Lea", "commentaire": "Bonjour" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.rows().await, 0);
}

#[tokio::test]
async fn test_invalid_json_is_treated_as_empty() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/api/chat")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "ok": false, "error": "Tous les champs sont requis." })
    );
    assert_eq!(app.rows().await, 0);
}

#[tokio::test]
async fn test_fields_are_trimmed() {
    let app = TestApp::spawn().await;

    assert_eq!(app.submit("  Lea  ", " Info ", "\tBonjour\n").await, 200);

    let messages = app.messages().await;
    assert_eq!(messages[0].prenom, "Lea");
    assert_eq!(messages[0].filiaire, "Info");
    assert_eq!(messages[0].commentaire, "Bonjour");
}

#[tokio::test]
async fn test_overlong_fields_are_truncated() {
    let app = TestApp::spawn().await;

    let status = app
        .submit(&"p".repeat(60), &"f".repeat(130), &"c".repeat(2100))
        .await;

    assert_eq!(status, 200);
    let message = &app.messages().await[0];
    assert_eq!(message.prenom.chars().count(), 50);
    assert_eq!(message.filiaire.chars().count(), 120);
    assert_eq!(message.commentaire.chars().count(), 2000);
}

#[tokio::test]
async fn test_truncation_counts_characters() {
    let app = TestApp::spawn().await;

    assert_eq!(app.submit(&"é".repeat(55), "Info", "Bonjour").await, 200);

    let message = &app.messages().await[0];
    assert_eq!(message.prenom, "é".repeat(50));
}

#[tokio::test]
async fn test_retention_keeps_most_recent_hundred() {
    let app = TestApp::spawn().await;

    for i in 0..105 {
        assert_eq!(app.submit("Lea", "Info", &format!("message {}", i)).await, 200);
    }

    assert_eq!(app.rows().await, 100);
    let texts: Vec<String> = app.messages().await.into_iter().map(|m| m.commentaire).collect();
    for i in 0..5 {
        assert!(!texts.contains(&format!("message {}", i)));
    }
    assert_eq!(texts.first().map(String::as_str), Some("message 104"));
    assert_eq!(texts.last().map(String::as_str), Some("message 5"));
}

#[tokio::test]
async fn test_retention_follows_configured_cap() {
    let app = TestApp::spawn_with(|config| config.max_messages = 3).await;

    for text in ["a", "b", "c", "d"] {
        app.submit("Lea", "Info", text).await;
    }

    let texts: Vec<String> = app.messages().await.into_iter().map(|m| m.commentaire).collect();
    assert_eq!(texts, vec!["d", "c", "b"]);
}

#[tokio::test]
async fn test_store_failure_returns_server_error() {
    let app = TestApp::spawn().await;
    app.state.db.close().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({ "prenom": "Lea", "filiaire": "Info", "commentaire": "Bonjour" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}
