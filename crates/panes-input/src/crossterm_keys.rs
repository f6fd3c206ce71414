//! Crossterm key event normalization.
//!
//! Converts crossterm `KeyEvent`s to the normalized key names used by
//! [`KeyCombo`] and [`parse_keybind`](crate::keymap::parse_keybind).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::KeyCombo;
use crate::keymap::normalize_key_name;

/// Convert a crossterm key code to the normalized key name, or `None` for
/// keys bindings cannot name (media keys, lone modifiers, ...).
pub fn normalize_key_code(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "Up",
        KeyCode::Down => "Down",
        KeyCode::Left => "Left",
        KeyCode::Right => "Right",

        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Insert => "Insert",

        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Enter => "Enter",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Esc => "Escape",

        KeyCode::F(n) => return Some(format!("F{n}")),
        KeyCode::Char(' ') => "Space",
        KeyCode::Char(c) => return Some(normalize_key_name(&c.to_string())),
        _ => return None,
    };
    Some(name.to_string())
}

impl KeyCombo {
    /// Build from a crossterm key event.
    ///
    /// Release events yield `None`. For character keys the shift flag follows
    /// the character itself: an upper-case letter is `Shift+<letter>`, while
    /// punctuation such as `!` carries no shift.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let key = normalize_key_code(event.code)?;
        let mods = event.modifiers;

        let shift = match event.code {
            KeyCode::BackTab => true,
            KeyCode::Char(c) if c.is_alphabetic() => c.is_uppercase(),
            KeyCode::Char(_) => false,
            _ => mods.contains(KeyModifiers::SHIFT),
        };

        Some(KeyCombo::new(
            mods.contains(KeyModifiers::CONTROL),
            mods.contains(KeyModifiers::ALT),
            shift,
            mods.intersects(KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::HYPER),
            key,
        ))
    }
}
