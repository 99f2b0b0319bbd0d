//! Shared helpers for driving adapters in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // for oneshot()

use userbench_gateway::adapters::AdapterKind;
use userbench_gateway::app_state::AppState;
use userbench_gateway::router::build_router;

pub fn app(kind: AdapterKind) -> Router {
    build_router(AppState::simulated(kind))
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON response body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("response is not JSON ({e}): {bytes:?}"));
    (status, body)
}

/// Assert an error response: given status and exactly one `error` field.
pub fn assert_error(status: StatusCode, body: &Value, want_status: StatusCode, want_msg: &str) {
    assert_eq!(status, want_status, "{body}");
    let obj = body.as_object().expect("error body must be an object");
    assert_eq!(obj.len(), 1, "{body}");
    assert_eq!(obj["error"], want_msg);
}
