//! Route-table adapter.
//!
//! Validation of `POST /api/users` runs as a route middleware in front of the
//! handler. A known path hit with the wrong method falls through to the same
//! 404 as an unknown path.

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};

use userbench_core::error::{Result, UserBenchError};
use userbench_core::model::{CreatedEnvelope, HealthReport, UserEnvelope};

use super::ValidatedUser;
use crate::app_state::AppState;
use crate::error_map::{route_not_found, ErrorReply};
use crate::{body, handlers};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health).fallback(route_not_found))
        .route("/api/users/:id", get(get_user).fallback(route_not_found))
        .route(
            "/api/users",
            post(create_user)
                .route_layer(middleware::from_fn(validate_user_body))
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
}

async fn health(State(app): State<AppState>) -> Json<HealthReport> {
    Json(handlers::health(&app))
}

async fn get_user(
    State(app): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> std::result::Result<Json<UserEnvelope>, ErrorReply> {
    let Path(id) = id.map_err(|e| UserBenchError::InvalidUserId(e.body_text()))?;
    Ok(Json(handlers::get_user(&app, &id).await?))
}

async fn create_user(
    State(app): State<AppState>,
    Extension(ValidatedUser(input)): Extension<ValidatedUser>,
) -> (StatusCode, Json<CreatedEnvelope>) {
    (StatusCode::CREATED, Json(handlers::create_user(&app, input)))
}

async fn validate_user_body(req: Request, next: Next) -> Response {
    match validated(req).await {
        Ok(req) => next.run(req).await,
        Err(e) => ErrorReply(e).into_response(),
    }
}

async fn validated(req: Request) -> Result<Request> {
    let (mut parts, body) = req.into_parts();
    let bytes = body::buffer(body).await?;
    let value = body::json_body(&parts.headers, &bytes)?;
    let input = handlers::validate_body(&value)?;
    parts.extensions.insert(ValidatedUser(input));
    Ok(Request::from_parts(parts, Body::from(bytes)))
}
