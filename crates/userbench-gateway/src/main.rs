//! userbench gateway binary.
//!
//! Starts the configured adapters (all three by default) on their fixed
//! ports. Optional first argument: path to the YAML config.

use tracing_subscriber::{fmt, EnvFilter};

use userbench_core::memory::CountingAllocator;
use userbench_gateway::{config, server};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let cfg = match config::load_or_default(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, error = %e, "config load failed");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(cfg).await {
        tracing::error!(error = %e, "userbench-gateway stopped");
        std::process::exit(1);
    }
}
