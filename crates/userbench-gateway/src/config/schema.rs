use std::collections::HashSet;
use std::net::IpAddr;

use serde::Deserialize;
use userbench_core::error::{Result, UserBenchError};

use crate::adapters::AdapterKind;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(UserBenchError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

/// Bind host and the adapters to start. Ports are fixed per adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_adapters")]
    pub adapters: Vec<AdapterKind>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            adapters: default_adapters(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(UserBenchError::Config(format!(
                "server.host must be an IP address, got {:?}",
                self.host
            )));
        }
        if self.adapters.is_empty() {
            return Err(UserBenchError::Config("server.adapters must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for a in &self.adapters {
            if !seen.insert(*a) {
                return Err(UserBenchError::Config(format!(
                    "server.adapters lists {} more than once",
                    a.name()
                )));
            }
        }
        Ok(())
    }

    pub fn host_addr(&self) -> Result<IpAddr> {
        self.host
            .parse()
            .map_err(|e| UserBenchError::Config(format!("server.host: {e}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.latency_ms > 5000 {
            return Err(UserBenchError::Config(
                "store.latency_ms must be between 0 and 5000".into(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_adapters() -> Vec<AdapterKind> {
    AdapterKind::ALL.to_vec()
}
fn default_latency_ms() -> u64 {
    10
}
