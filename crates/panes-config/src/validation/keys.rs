//! Key binding validation (non-empty lists, non-empty entries).

use crate::keybinds::all_keybinds;
use crate::schema::PanesConfig;

pub(crate) fn validate_keys(errors: &mut Vec<String>, config: &PanesConfig) {
    let keys = &config.keys;
    for (name, list) in [
        ("left", &keys.left),
        ("right", &keys.right),
        ("down", &keys.down),
        ("up", &keys.up),
        ("quit", &keys.quit),
    ] {
        if list.is_empty() {
            errors.push(format!("keys.{name} has no bindings"));
        }
    }

    for (name, binding) in all_keybinds(keys) {
        if binding.trim().is_empty() {
            errors.push(format!("keys.{name} contains an empty binding"));
        }
    }
}
