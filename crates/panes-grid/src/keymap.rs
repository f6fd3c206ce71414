//! Navigation and quit bindings for the grid.

use panes_common::Direction;
use panes_config::KeysConfig;
use panes_input::{KeyBinding, KeyCombo};

/// Keys the grid intercepts. Everything else reaches the active pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub left: KeyBinding,
    pub right: KeyBinding,
    pub down: KeyBinding,
    pub up: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeysConfig::default())
    }
}

impl KeyMap {
    /// Build from the `[keys]` config section. Unparseable entries are
    /// logged and skipped.
    pub fn from_config(config: &KeysConfig) -> Self {
        Self {
            left: binding(&config.left, "left"),
            right: binding(&config.right, "right"),
            down: binding(&config.down, "down"),
            up: binding(&config.up, "up"),
            quit: binding(&config.quit, "quit"),
        }
    }

    pub fn is_quit(&self, combo: &KeyCombo) -> bool {
        self.quit.matches(combo)
    }

    /// The navigation direction bound to `combo`, if any.
    pub fn direction(&self, combo: &KeyCombo) -> Option<Direction> {
        [
            (&self.up, Direction::Up),
            (&self.down, Direction::Down),
            (&self.right, Direction::Right),
            (&self.left, Direction::Left),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(combo))
        .map(|(_, direction)| direction)
    }

    /// One-line summary of the enabled bindings, e.g. for a status bar.
    pub fn help_line(&self) -> String {
        [&self.left, &self.down, &self.up, &self.right, &self.quit]
            .into_iter()
            .filter(|b| b.enabled())
            .filter_map(|b| b.help().map(|h| format!("{} {}", h.key, h.desc)))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// A binding whose help text names its first key.
fn binding(keys: &[String], desc: &str) -> KeyBinding {
    let help_key = keys.first().cloned().unwrap_or_default();
    KeyBinding::new(keys).with_help(help_key, desc)
}
