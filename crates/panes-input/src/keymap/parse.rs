use panes_common::InputError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"ctrl+h"`, `"Ctrl+Shift+T"` or
/// `"alt+left"` into a [`KeyBind`].
///
/// Modifier names are case-insensitive:
/// - `"ctrl"` / `"control"` -> `Ctrl`
/// - `"alt"` / `"option"` / `"opt"` -> `Alt`
/// - `"shift"` -> `Shift`
/// - `"super"` / `"cmd"` / `"command"` / `"win"` / `"meta"` -> `Super`
///
/// The last token becomes the key, even if it spells a modifier name.
pub fn parse_keybind(s: &str) -> Result<KeyBind, InputError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.len() == 1 && tokens[0].is_empty() {
        return Err(InputError::InvalidKeybind("empty keybind string".into()));
    }

    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some(split) => split,
        None => return Err(InputError::InvalidKeybind("empty keybind string".into())),
    };

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            InputError::InvalidKeybind(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    if key_token.is_empty() {
        return Err(InputError::InvalidKeybind(format!(
            "keybind '{s}' has no key component"
        )));
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "cmd" | "command" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(crate) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "plus" => "+".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "insert" | "ins" => "Insert".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" | "pgup" => "PageUp".into(),
        "pagedown" | "pgdown" => "PageDown".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
