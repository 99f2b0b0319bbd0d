//! Error mapping: `UserBenchError` -> HTTP status + `{ "error": ... }`.
//!
//! Internal faults are logged here with their real message; the client only
//! ever sees the fixed text from `client_message`. The outermost layer of
//! every adapter is [`catch_unexpected`], which turns a handler panic into a
//! 500 so the listener keeps serving.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::FutureExt;

use userbench_core::error::{ErrorClass, UserBenchError};
use userbench_core::model::ErrorBody;

/// Response wrapper so handlers can `?` a `UserBenchError`.
#[derive(Debug)]
pub struct ErrorReply(pub UserBenchError);

impl From<UserBenchError> for ErrorReply {
    fn from(e: UserBenchError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        let err = self.0;
        match (&err, err.class()) {
            (UserBenchError::Store(msg), _) => tracing::error!(error = %msg, "database error"),
            (_, ErrorClass::Internal) => tracing::error!(error = %err, "global error"),
            (_, _) => tracing::debug!(error = %err, "request rejected"),
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::new(err.client_message()))).into_response()
    }
}

/// Fallback for unmatched paths (and, in the router adapter, methods).
pub async fn route_not_found() -> ErrorReply {
    ErrorReply(UserBenchError::RouteNotFound)
}

/// 405 response carrying an `Allow` header.
pub fn method_not_allowed(allow: &'static str) -> Response {
    let mut res = ErrorReply(UserBenchError::MethodNotAllowed).into_response();
    res.headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(allow));
    res
}

/// Top-level catch-all middleware.
pub async fn catch_unexpected(req: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(res) => res,
        Err(panic) => ErrorReply(UserBenchError::Unexpected(panic_message(panic.as_ref())))
            .into_response(),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
