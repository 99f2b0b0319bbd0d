//! Shared application state for one adapter.
//!
//! Holds the adapter identity (reported as `framework` in every envelope)
//! and the user store. Nothing in here is mutated while serving.

use std::sync::Arc;

use crate::adapters::AdapterKind;
use crate::store::{SimulatedUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    adapter: AdapterKind,
    store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(adapter: AdapterKind, store: Arc<dyn UserStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { adapter, store }),
        }
    }

    /// State backed by a [`SimulatedUserStore`] with the default latency.
    pub fn simulated(adapter: AdapterKind) -> Self {
        Self::new(adapter, Arc::new(SimulatedUserStore::default()))
    }

    pub fn adapter(&self) -> AdapterKind {
        self.inner.adapter
    }

    pub fn framework(&self) -> &'static str {
        self.inner.adapter.framework()
    }

    pub fn store(&self) -> &dyn UserStore {
        self.inner.store.as_ref()
    }
}
