//! Request body decoding shared by the adapters.
//!
//! - Non-JSON content types and empty bodies read as `{}`.
//! - A JSON content type with a malformed body is an unexpected failure.

use axum::body::Body;
use axum::http::{header, HeaderMap};
use bytes::Bytes;
use serde_json::{Map, Value};

use userbench_core::error::{Result, UserBenchError};

/// Largest body any adapter buffers.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

pub fn is_json(headers: &HeaderMap) -> bool {
    let Some(ct) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

pub fn json_body(headers: &HeaderMap, bytes: &Bytes) -> Result<Value> {
    if !is_json(headers) || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| UserBenchError::Unexpected(format!("malformed json body: {e}")))
}

/// Buffer a streaming body, bounded by [`MAX_BODY_BYTES`].
pub async fn buffer(body: Body) -> Result<Bytes> {
    axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| UserBenchError::Unexpected(format!("read body failed: {e}")))
}
