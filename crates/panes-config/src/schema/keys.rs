//! Navigation and quit key bindings.

use serde::{Deserialize, Serialize};

/// Key bindings, each a list of key strings such as `"ctrl+h"` or
/// `"Alt+Left"`. Any key in a list triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub down: Vec<String>,
    pub up: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            left: vec!["ctrl+h".into()],
            right: vec!["ctrl+l".into()],
            down: vec!["ctrl+j".into()],
            up: vec!["ctrl+k".into()],
            quit: vec!["ctrl+c".into()],
        }
    }
}
