use crate::keymap::parse_keybind;

use super::key_combo::KeyCombo;

/// Help text shown for a binding, e.g. `("ctrl+h", "move left")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

/// A set of key combinations that trigger one action.
///
/// A disabled binding never matches, which lets an application switch an
/// action off without losing its keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<KeyCombo>,
    help: Option<Help>,
    enabled: bool,
}

impl KeyBinding {
    /// Build a binding from key strings.
    ///
    /// Invalid strings are logged as warnings and skipped.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut combos = Vec::new();
        for key in keys {
            let key = key.as_ref();
            match parse_keybind(key) {
                Ok(kb) => {
                    let combo = KeyCombo::from_keybind(&kb);
                    if !combos.contains(&combo) {
                        combos.push(combo);
                    }
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{key}': {e}");
                }
            }
        }
        Self {
            keys: combos,
            help: None,
            enabled: true,
        }
    }

    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Some(Help {
            key: key.into(),
            desc: desc.into(),
        });
        self
    }

    /// Whether `combo` triggers this binding.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        self.enabled && self.keys.contains(combo)
    }

    pub fn keys(&self) -> &[KeyCombo] {
        &self.keys
    }

    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Display form of all keys, joined with `/`.
    pub fn display(&self) -> String {
        self.keys
            .iter()
            .map(KeyCombo::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}
