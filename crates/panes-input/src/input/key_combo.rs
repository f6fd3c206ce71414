use std::fmt;

use crate::keymap::{keybind_to_display, KeyBind, Modifier};

pub(crate) const MOD_CTRL: u8 = Modifier::Ctrl.bit();
pub(crate) const MOD_ALT: u8 = Modifier::Alt.bit();
pub(crate) const MOD_SHIFT: u8 = Modifier::Shift.bit();
pub(crate) const MOD_SUPER: u8 = Modifier::Super.bit();

/// A canonical key representation for matching key events against bindings.
///
/// Modifiers are stored as a bitmask so comparison does not depend on the
/// order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "H", "Enter", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |mods, m| mods | m.bit()),
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier flags and a normalized key name.
    pub fn new(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: impl Into<String>) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self {
            mods,
            key: key.into(),
        }
    }

    /// A key with no modifiers.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            mods: 0,
            key: key.into(),
        }
    }

    pub fn ctrl(&self) -> bool {
        self.mods & MOD_CTRL != 0
    }

    pub fn alt(&self) -> bool {
        self.mods & MOD_ALT != 0
    }

    pub fn shift(&self) -> bool {
        self.mods & MOD_SHIFT != 0
    }

    /// The character a plain or shifted printable key produces, if any.
    pub fn text(&self) -> Option<char> {
        if self.mods & !MOD_SHIFT != 0 {
            return None;
        }
        if self.key == "Space" {
            return Some(' ');
        }
        let mut chars = self.key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if self.shift() {
            Some(c)
        } else {
            c.to_lowercase().next()
        }
    }

    /// Reconstruct a [`KeyBind`], modifiers in canonical order.
    pub fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: Modifier::ALL
                .into_iter()
                .filter(|m| self.mods & m.bit() != 0)
                .collect(),
            key: self.key.clone(),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&keybind_to_display(&self.to_keybind()))
    }
}
