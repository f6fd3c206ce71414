//! Configuration schema types.
//!
//! Every section uses `#[serde(default)]`, so a config file only needs the
//! fields it wants to override.

mod keys;
mod logging;
mod styles;

pub use keys::KeysConfig;
pub use logging::LoggingConfig;
pub use styles::{Align, BorderKind, StylesConfig};

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanesConfig {
    pub keys: KeysConfig,
    pub styles: StylesConfig,
    pub logging: LoggingConfig,
}
