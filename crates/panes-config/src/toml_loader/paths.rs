use panes_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "panes";
const FILE_NAME: &str = "config.toml";

/// `<config_dir>/panes/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("cannot write", e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
