//! Top-level facade crate for userbench.
//!
//! Re-exports the core contract and the gateway library so users can depend on a single crate.

pub mod core {
    pub use userbench_core::*;
}

pub mod gateway {
    pub use userbench_gateway::*;
}
