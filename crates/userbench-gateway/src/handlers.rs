//! Endpoint handlers shared by every adapter.
//!
//! These functions own the request contract: what is validated, what is
//! timed, and which outcome maps to which error. They know nothing about
//! routing; each adapter extracts the path/body its own way and calls in.

use chrono::Utc;
use rand::Rng;
use serde_json::Value;

use userbench_core::clock::now_iso;
use userbench_core::error::{Result, UserBenchError};
use userbench_core::id::parse_user_id;
use userbench_core::memory::memory_usage;
use userbench_core::model::{
    CreatedEnvelope, HealthReport, UserEnvelope, UserInput, UserRecord, STATUS_OK, USER_CREATED,
};
use userbench_core::timer::{timed, RequestTimer};
use userbench_core::validate::validate_user;

use crate::app_state::AppState;

/// Created ids are drawn from `0..NEW_ID_RANGE`. Uniqueness is not checked.
pub const NEW_ID_RANGE: i64 = 1000;

/// `GET /health`. Cannot fail.
pub fn health(state: &AppState) -> HealthReport {
    HealthReport {
        status: STATUS_OK,
        framework: state.framework().to_string(),
        memory: memory_usage(),
        timestamp: now_iso(),
    }
}

/// `GET /api/users/:id`.
pub async fn get_user(state: &AppState, raw_id: &str) -> Result<UserEnvelope> {
    let timer = RequestTimer::start();
    let id = parse_user_id(raw_id)?;

    let (found, lookup) = timed(state.store().get_user(id)).await;
    tracing::debug!(id, %lookup, "store lookup finished");
    let record = found?.ok_or(UserBenchError::UserNotFound(id))?;

    Ok(UserEnvelope {
        data: record,
        processing_time: timer.finish().to_string(),
        framework: state.framework().to_string(),
    })
}

/// Validation step of `POST /api/users`. Runs before the timed section.
pub fn validate_body(body: &Value) -> Result<UserInput> {
    Ok(validate_user(body)?)
}

/// `POST /api/users` after validation passed.
pub fn create_user(state: &AppState, input: UserInput) -> CreatedEnvelope {
    let timer = RequestTimer::start();

    let id = rand::thread_rng().gen_range(0..NEW_ID_RANGE);
    let user = UserRecord::from_input(id, input, Utc::now());

    CreatedEnvelope {
        message: USER_CREATED,
        user,
        processing_time: timer.finish().to_string(),
        framework: state.framework().to_string(),
    }
}
