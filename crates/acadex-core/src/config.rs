use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the Acadex portal core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Path to the data directory for the local store backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Per-credential-lookup timeout in milliseconds. A lookup exceeding
    /// this is counted as failed; it never blocks the aggregate.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl PortalConfig {
    /// Per-lookup timeout as a `Duration`.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}
