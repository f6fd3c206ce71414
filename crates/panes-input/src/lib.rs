pub mod crossterm_keys;
pub mod input;
pub mod keymap;

pub use crossterm_keys::normalize_key_code;
pub use input::{Help, KeyBinding, KeyCombo};
pub use keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};
