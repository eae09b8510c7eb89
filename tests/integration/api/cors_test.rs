//! CORS policy tests
//!
//! The allow-list applies to `/api/*`, `/post` and `/debug/*` only.

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
    HeaderValue, Method, StatusCode,
};

use crate::assert_no_header;
use crate::common::{TestApp, ALLOWED_ORIGIN};

#[tokio::test]
async fn test_allowed_origin_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .get("/api/health")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static(ALLOWED_ORIGIN))
    );
}

#[tokio::test]
async fn test_unknown_origin_gets_no_cors_header() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .get("/api/health")
        .add_header(ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_no_header!(response, ACCESS_CONTROL_ALLOW_ORIGIN);
}

#[tokio::test]
async fn test_preflight_on_api_chat() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .method(Method::OPTIONS, "/api/chat")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static(ALLOWED_ORIGIN))
    );
}

#[tokio::test]
async fn test_page_has_no_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .get("/")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_no_header!(response, ACCESS_CONTROL_ALLOW_ORIGIN);
}

#[tokio::test]
async fn test_configured_origins_replace_defaults() {
    let app = TestApp::spawn_with(|config| {
        config.cors_origins = vec!["https://front.example".to_string()];
    })
    .await;

    let allowed = app
        .server
        .get("/debug/db")
        .add_header(ORIGIN, HeaderValue::from_static("https://front.example"))
        .await;
    let default = app
        .server
        .get("/debug/db")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    assert!(allowed.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_some());
    assert_no_header!(default, ACCESS_CONTROL_ALLOW_ORIGIN);
}
