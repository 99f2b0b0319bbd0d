//! Listener startup for the configured adapters.
//!
//! All adapters share one store and run side by side on their fixed ports
//! inside the same runtime.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinSet;

use userbench_core::error::{Result, UserBenchError};
use userbench_core::memory::memory_usage;

use crate::adapters::AdapterKind;
use crate::app_state::AppState;
use crate::config::BenchConfig;
use crate::router;
use crate::store::{SimulatedUserStore, UserStore};

pub async fn run(cfg: BenchConfig) -> Result<()> {
    let host = cfg.server.host_addr()?;
    let store: Arc<dyn UserStore> = Arc::new(SimulatedUserStore::new(Duration::from_millis(
        cfg.store.latency_ms,
    )));

    let mut servers = JoinSet::new();
    for &kind in &cfg.server.adapters {
        let addr = SocketAddr::new(host, kind.port());
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| UserBenchError::Config(format!("bind {addr} failed: {e}")))?;

        let app = router::build_router(AppState::new(kind, Arc::clone(&store)));
        log_banner(kind, addr);

        servers.spawn(async move { (kind, axum::serve(listener, app).await) });
    }

    while let Some(joined) = servers.join_next().await {
        match joined {
            Ok((kind, Ok(()))) => tracing::info!(adapter = kind.name(), "server stopped"),
            Ok((kind, Err(e))) => {
                return Err(UserBenchError::Unexpected(format!(
                    "{} server failed: {e}",
                    kind.name()
                )))
            }
            Err(e) => return Err(UserBenchError::Unexpected(format!("server task failed: {e}"))),
        }
    }

    Ok(())
}

fn log_banner(kind: AdapterKind, addr: SocketAddr) {
    let base = format!("http://{addr}");
    let memory = memory_usage();
    tracing::info!(
        adapter = kind.name(),
        framework = kind.framework(),
        url = %base,
        rss = %memory.rss,
        heap_total = %memory.heap_total,
        heap_used = %memory.heap_used,
        "server running"
    );
    tracing::info!("  GET  {base}/health");
    tracing::info!("  GET  {base}/api/users/:id");
    tracing::info!("  POST {base}/api/users");
    tracing::info!("  try: curl {base}/api/users/123");
    tracing::info!(
        "  try: curl -X POST {base}/api/users -H \"Content-Type: application/json\" -d '{{\"name\":\"John\",\"email\":\"john@example.com\",\"age\":25}}'"
    );
}
