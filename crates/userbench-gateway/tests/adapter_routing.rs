//! Where the adapters differ: unknown paths and wrong methods.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::{header, Method, StatusCode};
use tower::ServiceExt;

use common::{app, assert_error, request, send};
use userbench_gateway::adapters::AdapterKind;

#[tokio::test]
async fn unknown_paths_are_404_everywhere() {
    for kind in AdapterKind::ALL {
        for uri in ["/", "/nope", "/api", "/api/users/1/extra"] {
            let (status, body) = send(app(kind), request(Method::GET, uri)).await;
            assert_error(status, &body, StatusCode::NOT_FOUND, "Route not found");
        }
    }
}

#[tokio::test]
async fn router_adapter_treats_wrong_method_as_missing_route() {
    let cases = [
        (Method::POST, "/health"),
        (Method::DELETE, "/api/users/1"),
        (Method::GET, "/api/users"),
    ];
    for (method, uri) in cases {
        let (status, body) = send(app(AdapterKind::Router), request(method, uri)).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "Route not found");
    }
}

#[tokio::test]
async fn method_checking_adapters_answer_405() {
    let cases = [
        (Method::POST, "/health"),
        (Method::PUT, "/api/users/1"),
        (Method::GET, "/api/users"),
        (Method::DELETE, "/api/users"),
    ];
    for kind in [AdapterKind::Middleware, AdapterKind::Pages] {
        for (method, uri) in cases.clone() {
            let (status, body) = send(app(kind), request(method, uri)).await;
            assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        }
    }
}

#[tokio::test]
async fn middleware_adapter_sets_allow_header() {
    let res = app(AdapterKind::Middleware)
        .oneshot(request(Method::GET, "/api/users"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[header::ALLOW], "POST");
}

#[tokio::test]
async fn responses_are_json() {
    for kind in AdapterKind::ALL {
        for uri in ["/health", "/api/users/7", "/api/users/404", "/missing"] {
            let res = app(kind).oneshot(request(Method::GET, uri)).await.unwrap();
            let ct = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(ct.starts_with("application/json"), "{kind:?} {uri}: {ct}");
        }
    }
}

#[test]
fn adapter_identity_is_fixed() {
    assert_eq!(AdapterKind::Router.port(), 3000);
    assert_eq!(AdapterKind::Pages.port(), 3002);
    assert_eq!(AdapterKind::Middleware.port(), 3003);

    let frameworks: std::collections::HashSet<_> =
        AdapterKind::ALL.iter().map(|k| k.framework()).collect();
    assert_eq!(frameworks.len(), 3);
}
