use serde::{Deserialize, Serialize};

/// Terminal logger settings. `RUST_LOG` takes precedence over `level` when it parses.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Fallback level filter, e.g. `"info"` or `"debug"`.
    pub level: String,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}
