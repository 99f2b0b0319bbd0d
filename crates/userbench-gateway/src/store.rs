//! Simulated user backend.
//!
//! Every lookup suspends on a tokio timer before answering, which stands in
//! for the round trip to a real database. Two ids are wired to fixed
//! outcomes so each adapter can exercise its failure paths the same way:
//! [`FAILING_USER_ID`] fails like a dropped connection and
//! [`MISSING_USER_ID`] has no record. These are test fixtures; a real store
//! would take a fault model instead.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use userbench_core::error::{Result, UserBenchError};
use userbench_core::model::UserRecord;

pub const FAILING_USER_ID: i64 = 999;
pub const MISSING_USER_ID: i64 = 404;
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(10);

/// Read access to users. `Ok(None)` means the user does not exist.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>>;
}

#[derive(Debug, Clone)]
pub struct SimulatedUserStore {
    latency: Duration,
}

impl Default for SimulatedUserStore {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl SimulatedUserStore {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl UserStore for SimulatedUserStore {
    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>> {
        tokio::time::sleep(self.latency).await;

        match id {
            FAILING_USER_ID => Err(UserBenchError::Store("Database connection failed".into())),
            MISSING_USER_ID => Ok(None),
            _ => Ok(Some(UserRecord::synthesize(id, Utc::now()))),
        }
    }
}
