//! Page and static asset tests (GET /, GET /static/*)

use axum::http::StatusCode;

use crate::assert_contains;
use crate::common::TestApp;

#[tokio::test]
async fn test_page_lists_newest_first() {
    let app = TestApp::spawn().await;
    app.submit("Lea", "Info", "premier message").await;
    app.submit("Noe", "Droit", "second message").await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    let newer = html.find("second message").unwrap();
    let older = html.find("premier message").unwrap();
    assert!(newer < older);
    assert_contains!(html, "action=\"/post\"");
}

#[tokio::test]
async fn test_page_escapes_user_text() {
    let app = TestApp::spawn().await;
    app.submit("<b>Lea</b>", "Info", "Bonjour").await;

    let html = app.server.get("/").await.text();

    assert!(!html.contains("<b>Lea</b>"));
    assert_contains!(html, "&lt;b&gt;Lea");
}

#[tokio::test]
async fn test_empty_page() {
    let app = TestApp::spawn().await;

    let html = app.server.get("/").await.text();

    assert_contains!(html, "Aucun message");
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/static/style.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), ".feed");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
