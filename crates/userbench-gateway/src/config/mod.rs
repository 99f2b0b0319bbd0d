//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use userbench_core::error::{Result, UserBenchError};

pub use schema::{BenchConfig, ServerSection, StoreSection};

pub const DEFAULT_CONFIG_PATH: &str = "userbench.yaml";

pub fn load_from_file(path: &str) -> Result<BenchConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| UserBenchError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<BenchConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(BenchConfig::default())
        }
        Err(e) => Err(UserBenchError::Config(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<BenchConfig> {
    let cfg: BenchConfig = serde_yaml::from_str(s)
        .map_err(|e| UserBenchError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
