//! Per-path page adapter.
//!
//! Each path is bound to a single handler for every method; the handler
//! rejects methods it does not serve with 405 and reads its own body.

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

use userbench_core::error::UserBenchError;
use userbench_core::model::{CreatedEnvelope, UserEnvelope};

use crate::app_state::AppState;
use crate::error_map::{route_not_found, ErrorReply};
use crate::{body, handlers};

type Reply<T> = std::result::Result<T, ErrorReply>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", any(health_page))
        .route("/api/users", any(users_index_page))
        .route("/api/users/:id", any(user_by_id_page))
        .fallback(route_not_found)
}

fn expect_method(actual: &Method, expected: Method) -> Reply<()> {
    if *actual == expected {
        Ok(())
    } else {
        Err(ErrorReply(UserBenchError::MethodNotAllowed))
    }
}

async fn health_page(method: Method, State(app): State<AppState>) -> Response {
    if let Err(e) = expect_method(&method, Method::GET) {
        return e.into_response();
    }
    (StatusCode::OK, Json(handlers::health(&app))).into_response()
}

async fn user_by_id_page(
    method: Method,
    State(app): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Reply<Json<UserEnvelope>> {
    expect_method(&method, Method::GET)?;
    let Path(id) = id.map_err(|e| UserBenchError::InvalidUserId(e.body_text()))?;
    Ok(Json(handlers::get_user(&app, &id).await?))
}

async fn users_index_page(
    State(app): State<AppState>,
    req: Request,
) -> Reply<(StatusCode, Json<CreatedEnvelope>)> {
    expect_method(req.method(), Method::POST)?;

    let (parts, raw) = req.into_parts();
    let bytes = body::buffer(raw).await?;
    let value = body::json_body(&parts.headers, &bytes)?;
    let input = handlers::validate_body(&value)?;

    Ok((StatusCode::CREATED, Json(handlers::create_user(&app, input))))
}
