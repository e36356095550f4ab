mod common;

use axum::{body::Body, http::Request};
use common::{body_json, get, send, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let response = send(&app, get("/api/health")).await;
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let app = test_app().await;

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "listing-check-42")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["x-request-id"], "listing-check-42");
}

#[tokio::test]
async fn markets_list_the_exchange() {
    let app = test_app().await;

    let response = send(&app, get("/api/markets")).await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body[0]["id"], "RCX");
    assert_eq!(body[0]["status"], "open");
    assert_eq!(body[0]["trend"], "up");
}
