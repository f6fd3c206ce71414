//! Keybind validation utilities.

use crate::schema::KeysConfig;
use panes_common::ConfigError;
use std::collections::HashMap;

/// Returns every configured binding as `(action, binding)` pairs.
pub fn all_keybinds(config: &KeysConfig) -> Vec<(&'static str, &str)> {
    let actions: [(&'static str, &Vec<String>); 5] = [
        ("left", &config.left),
        ("right", &config.right),
        ("down", &config.down),
        ("up", &config.up),
        ("quit", &config.quit),
    ];

    actions
        .into_iter()
        .flat_map(|(name, keys)| keys.iter().map(move |k| (name, k.as_str())))
        .collect()
}

/// Comparison form of a binding string: lowercase, no whitespace.
fn canonical(binding: &str) -> String {
    binding
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Validate that no key combination is bound to two different actions.
pub fn validate_no_duplicates(config: &KeysConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = canonical(binding);
        match seen.get(&key).copied() {
            Some(existing) if existing != name => {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate keybind '{binding}': assigned to both '{existing}' and '{name}'"
                )));
            }
            Some(_) => {}
            None => {
                seen.insert(key, name);
            }
        }
    }

    Ok(())
}
