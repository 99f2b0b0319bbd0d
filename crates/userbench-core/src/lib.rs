//! userbench core: the transport-agnostic request contract.
//!
//! This crate holds everything the three HTTP adapters must agree on: the
//! error surface and its status mapping, the user model and response
//! envelopes, input validation, id parsing, request timing and the memory
//! report. It carries no transport or runtime dependencies so every adapter
//! consumes exactly the same rules.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input must surface as `UserBenchError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod id;
pub mod memory;
pub mod model;
pub mod timer;
pub mod validate;

/// Shared result type.
pub use error::{Result, UserBenchError};
