//! Diagnostics tests (GET /api/health, GET /debug/db)

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_health_reports_row_count() {
    let app = TestApp::spawn().await;
    app.submit("Lea", "Info", "Bonjour").await;
    app.submit("Noe", "Droit", "Salut").await;

    let response = app.server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "ok": true, "rows": 2 }));
}

#[tokio::test]
async fn test_health_on_unreachable_store() {
    let app = TestApp::spawn().await;
    app.state.db.close().await;

    let response = app.server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], false);
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_debug_db_in_development() {
    let app = TestApp::spawn().await;
    app.submit("Lea", "Info", "Bonjour").await;

    let response = app.server.get("/debug/db").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], true);
    assert_eq!(body["env"], "development");
    assert_eq!(body["backend"], "sqlite");
    assert_eq!(body["database"], app.database.path());
    assert_eq!(body["host"], Value::Null);
    assert!(body["version"].is_string());
    assert_eq!(body["rows"], 1);
}

#[tokio::test]
async fn test_debug_db_in_production_hides_identity() {
    let app = TestApp::spawn_with(|config| config.production = true).await;

    let response = app.server.get("/debug/db").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let object = body.as_object().unwrap();
    assert_eq!(body["env"], "production");
    assert_eq!(body["backend"], "sqlite");
    assert!(!object.contains_key("database"));
    assert!(!object.contains_key("host"));
    assert_eq!(body["rows"], 0);
}

#[tokio::test]
async fn test_debug_db_on_unreachable_store() {
    let app = TestApp::spawn().await;
    app.state.db.close().await;

    let response = app.server.get("/debug/db").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], false);
    assert_eq!(body["env"], "development");
    assert_eq!(body["backend"], "sqlite");
    assert!(body["error"].is_string());
}
