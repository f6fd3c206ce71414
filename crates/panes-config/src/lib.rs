//! Panes configuration system.
//!
//! Provides TOML-based configuration for key bindings, cell styles and
//! logging. All sections use serde defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use panes_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("quit keys: {:?}", config.keys.quit);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{Align, BorderKind, KeysConfig, LoggingConfig, PanesConfig, StylesConfig};

use panes_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating a commented default
/// file when none exists, then validate it.
pub fn load_config() -> Result<PanesConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error rather than a reason
/// to write a default.
pub fn load_config_from(path: &Path) -> Result<PanesConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
