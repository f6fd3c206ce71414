//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod keys;
mod logging;
mod styles;


use crate::keybinds;
use crate::schema::PanesConfig;
use panes_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PanesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keys) {
        errors.push(e.to_string());
    }

    keys::validate_keys(&mut errors, config);
    styles::validate_styles(&mut errors, config);
    logging::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
