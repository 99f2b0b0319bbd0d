//! Onion-middleware adapter.
//!
//! Every request passes a body parser that buffers and decodes JSON once and
//! leaves it in the request extensions; the create route adds a validation
//! layer on top. Known paths answer other methods with 405 and `Allow`.

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::Value;

use userbench_core::error::UserBenchError;
use userbench_core::model::{CreatedEnvelope, HealthReport, UserEnvelope};

use super::ValidatedUser;
use crate::app_state::AppState;
use crate::error_map::{method_not_allowed, route_not_found, ErrorReply};
use crate::{body, handlers};

type Reply<T> = std::result::Result<T, ErrorReply>;

/// Decoded request body, `{}` when the request carried no JSON.
#[derive(Debug, Clone)]
pub struct ParsedBody(pub Value);

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health).fallback(get_only))
        .route("/api/users/:id", get(get_user).fallback(get_only))
        .route(
            "/api/users",
            post(create_user)
                .route_layer(middleware::from_fn(require_valid_user))
                .fallback(post_only),
        )
        .layer(middleware::from_fn(parse_body))
        .fallback(route_not_found)
}

async fn health(State(app): State<AppState>) -> Json<HealthReport> {
    Json(handlers::health(&app))
}

async fn get_user(
    State(app): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Reply<Json<UserEnvelope>> {
    let Path(id) = id.map_err(|e| UserBenchError::InvalidUserId(e.body_text()))?;
    Ok(Json(handlers::get_user(&app, &id).await?))
}

async fn create_user(
    State(app): State<AppState>,
    Extension(ValidatedUser(input)): Extension<ValidatedUser>,
) -> (StatusCode, Json<CreatedEnvelope>) {
    (StatusCode::CREATED, Json(handlers::create_user(&app, input)))
}

async fn get_only() -> Response {
    method_not_allowed("GET, HEAD")
}

async fn post_only() -> Response {
    method_not_allowed("POST")
}

async fn parse_body(req: Request, next: Next) -> Reply<Response> {
    let (mut parts, body) = req.into_parts();
    let bytes = body::buffer(body).await?;
    let value = body::json_body(&parts.headers, &bytes)?;
    parts.extensions.insert(ParsedBody(value));
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

async fn require_valid_user(mut req: Request, next: Next) -> Reply<Response> {
    let ParsedBody(value) = req
        .extensions()
        .get::<ParsedBody>()
        .cloned()
        .ok_or_else(|| UserBenchError::Unexpected("body parser did not run".into()))?;
    let input = handlers::validate_body(&value)?;
    req.extensions_mut().insert(ValidatedUser(input));
    Ok(next.run(req).await)
}
