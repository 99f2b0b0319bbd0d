//! The shared contract, checked against every adapter.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, assert_error, get, post_json, send};
use userbench_gateway::adapters::AdapterKind;

#[tokio::test]
async fn health_reports_ok_and_memory() {
    for kind in AdapterKind::ALL {
        let (status, body) = send(app(kind), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["framework"], kind.framework());
        for field in ["rss", "heapTotal", "heapUsed"] {
            let v = body["memory"][field].as_str().unwrap();
            assert!(v.ends_with(" MB"), "{kind:?} {field}={v}");
        }
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
        assert!(ts.ends_with('Z'));
    }
}

#[tokio::test]
async fn get_user_returns_synthesized_record() {
    for kind in AdapterKind::ALL {
        let (status, body) = send(app(kind), get("/api/users/123")).await;
        assert_eq!(status, StatusCode::OK, "{kind:?}");
        assert_eq!(body["data"]["id"], 123);
        assert_eq!(body["data"]["name"], "User 123");
        assert_eq!(body["data"]["email"], "user123@example.com");
        assert!(body["data"].get("age").is_none());
        assert!(body["data"]["createdAt"].is_string());
        assert_eq!(body["framework"], kind.framework());

        let pt = body["processingTime"].as_str().unwrap();
        let ms: f64 = pt.strip_suffix("ms").unwrap().parse().unwrap();
        // includes the simulated store latency
        assert!(ms >= 10.0, "{pt}");
    }
}

#[tokio::test]
async fn get_user_is_repeatable() {
    let kind = AdapterKind::Router;
    let (_, a) = send(app(kind), get("/api/users/123")).await;
    let (_, b) = send(app(kind), get("/api/users/123")).await;
    for field in ["id", "name", "email"] {
        assert_eq!(a["data"][field], b["data"][field]);
    }
}

#[tokio::test]
async fn get_user_failure_paths() {
    for kind in AdapterKind::ALL {
        let (status, body) = send(app(kind), get("/api/users/404")).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "User not found");

        let (status, body) = send(app(kind), get("/api/users/999")).await;
        assert_error(status, &body, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");

        let (status, body) = send(app(kind), get("/api/users/abc")).await;
        assert_error(status, &body, StatusCode::BAD_REQUEST, "Invalid user ID");
    }
}

#[tokio::test]
async fn lenient_id_parsing() {
    let (status, body) = send(app(AdapterKind::Pages), get("/api/users/42abc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 42);

    let (status, body) = send(app(AdapterKind::Pages), get("/api/users/-5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "User -5");
}

#[tokio::test]
async fn create_user_echoes_input() {
    for kind in AdapterKind::ALL {
        let req = post_json(
            "/api/users",
            r#"{"name":"John","email":"john@example.com","age":25}"#,
        );
        let (status, body) = send(app(kind), req).await;
        assert_eq!(status, StatusCode::CREATED, "{kind:?} {body}");
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["framework"], kind.framework());

        let user = &body["user"];
        let id = user["id"].as_i64().unwrap();
        assert!((0..=999).contains(&id), "{id}");
        assert_eq!(user["name"], "John");
        assert_eq!(user["email"], "john@example.com");
        assert_eq!(user["age"], 25);
        assert!(user["createdAt"].is_string());
        assert!(body["processingTime"].as_str().unwrap().ends_with("ms"));
    }
}

#[tokio::test]
async fn create_user_validation_order() {
    let cases = [
        (json!({ "email": "john@example.com", "age": 25 }), "Name must be at least 2 characters"),
        (json!({ "name": "J", "email": "nope", "age": 3 }), "Name must be at least 2 characters"),
        (json!({ "name": 12, "email": "john@example.com", "age": 25 }), "Name must be at least 2 characters"),
        (json!({ "name": "John", "email": "john.example.com", "age": 25 }), "Valid email required"),
        (json!({ "name": "John", "email": "nope", "age": 3 }), "Valid email required"),
        (json!({ "name": "John", "email": "john@example.com", "age": 17 }), "Age must be 18 or older"),
        (json!({ "name": "John", "email": "john@example.com", "age": "25" }), "Age must be 18 or older"),
        (json!({ "name": "John", "email": "john@example.com" }), "Age must be 18 or older"),
    ];
    for kind in AdapterKind::ALL {
        for (payload, reason) in &cases {
            let req = post_json("/api/users", &payload.to_string());
            let (status, body) = send(app(kind), req).await;
            assert_error(status, &body, StatusCode::BAD_REQUEST, reason);
        }
    }
}

#[tokio::test]
async fn create_user_without_json_content_type_reads_as_empty() {
    for kind in AdapterKind::ALL {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "text/plain")
            .body(axum::body::Body::from(r#"{"name":"John"}"#))
            .unwrap();
        let (status, body) = send(app(kind), req).await;
        assert_error(status, &body, StatusCode::BAD_REQUEST, "Name must be at least 2 characters");
    }
}

#[tokio::test]
async fn malformed_json_hits_the_catch_all() {
    for kind in AdapterKind::ALL {
        let req = post_json("/api/users", r#"{"name": "John", "#);
        let (status, body) = send(app(kind), req).await;
        assert_error(status, &body, StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!");
    }
}
