use serde::{Deserialize, Serialize};

/// Modifier held together with a key. Platform names (`cmd`, `win`,
/// `option`) are folded into these four by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    /// Display and bitmask order.
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super];

    /// This modifier's bit in [`KeyCombo::mods`](crate::KeyCombo::mods).
    pub const fn bit(self) -> u8 {
        match self {
            Modifier::Ctrl => 0b0001,
            Modifier::Alt => 0b0010,
            Modifier::Shift => 0b0100,
            Modifier::Super => 0b1000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    }
}

/// A parsed binding string: the modifiers as written (deduplicated) and
/// the normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}
