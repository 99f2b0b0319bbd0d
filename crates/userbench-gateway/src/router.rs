//! Axum router wiring.
//!
//! Picks the adapter's route table and wraps it in the catch-all layer.

use axum::{middleware, Router};

use crate::{app_state::AppState, error_map};

pub fn build_router(state: AppState) -> Router {
    state
        .adapter()
        .routes()
        .layer(middleware::from_fn(error_map::catch_unexpected))
        .with_state(state)
}
