use super::types::KeyBind;

/// Render a [`KeyBind`] for help text, e.g. `Ctrl+Shift+T`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    kb.modifiers
        .iter()
        .map(|m| m.label())
        .chain(std::iter::once(kb.key.as_str()))
        .collect::<Vec<_>>()
        .join("+")
}
