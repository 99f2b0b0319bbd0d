//! The three HTTP adapters.
//!
//! Each adapter exposes the same three endpoints over a different request
//! plumbing style and reports its own `framework` id:
//!
//! - `router`: route table, validation as a route middleware, every miss is 404.
//! - `middleware`: onion stack with a shared body parser, 405 for known paths.
//! - `pages`: one handler per path that checks the method itself, 405 for known paths.

pub mod middleware;
pub mod pages;
pub mod router;

use axum::Router;
use serde::Deserialize;

use userbench_core::model::UserInput;

use crate::app_state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    Router,
    Middleware,
    Pages,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 3] = [AdapterKind::Router, AdapterKind::Middleware, AdapterKind::Pages];

    pub fn name(self) -> &'static str {
        match self {
            AdapterKind::Router => "router",
            AdapterKind::Middleware => "middleware",
            AdapterKind::Pages => "pages",
        }
    }

    /// Value of the `framework` field in every envelope.
    pub fn framework(self) -> &'static str {
        match self {
            AdapterKind::Router => "axum-router",
            AdapterKind::Middleware => "axum-middleware",
            AdapterKind::Pages => "axum-pages",
        }
    }

    /// Fixed listening port.
    pub fn port(self) -> u16 {
        match self {
            AdapterKind::Router => 3000,
            AdapterKind::Middleware => 3003,
            AdapterKind::Pages => 3002,
        }
    }

    pub fn routes(self) -> Router<AppState> {
        match self {
            AdapterKind::Router => router::routes(),
            AdapterKind::Middleware => middleware::routes(),
            AdapterKind::Pages => pages::routes(),
        }
    }
}

/// Request extension set once a create-user body passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedUser(pub UserInput);
