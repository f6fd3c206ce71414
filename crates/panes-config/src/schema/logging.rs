use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level: trace, debug, info, warn or error.
    pub level: String,
    /// Log file; the platform cache directory is used when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}
