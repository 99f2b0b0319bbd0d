//! userbench gateway library entry.
//!
//! This crate wires the shared request contract from `userbench-core` into
//! three axum adapters that expose the same API with different request
//! plumbing. It is consumed by the binary (`main.rs`) and by integration
//! tests, which drive the routers in-process.

pub mod adapters;
pub mod app_state;
pub mod body;
pub mod config;
pub mod error_map;
pub mod handlers;
pub mod router;
pub mod server;
pub mod store;
