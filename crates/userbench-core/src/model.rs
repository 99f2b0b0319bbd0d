//! User model and response envelopes.
//!
//! Field names on the wire are camelCase (`createdAt`, `processingTime`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::clock::serialize_iso;
use crate::memory::MemoryUsageReport;

/// Validated write payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    /// Echoed back exactly as the caller sent it (`25`, `25.5`).
    pub age: Number,
}

/// An ephemeral user record. Reads leave `age` empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Deterministic record for a read of `id` (only `created_at` varies).
    pub fn synthesize(id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            age: None,
            created_at,
        }
    }

    /// Record for a freshly created user.
    pub fn from_input(id: i64, input: UserInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: Some(input.age),
            created_at,
        }
    }
}

pub const STATUS_OK: &str = "OK";
pub const USER_CREATED: &str = "User created successfully";

/// `GET /health` body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub framework: String,
    pub memory: MemoryUsageReport,
    pub timestamp: String,
}

/// `GET /api/users/:id` success envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEnvelope {
    pub data: UserRecord,
    pub processing_time: String,
    pub framework: String,
}

/// `POST /api/users` success envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEnvelope {
    pub message: &'static str,
    pub user: UserRecord,
    pub processing_time: String,
    pub framework: String,
}

/// Body of every error response: exactly one `error` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
