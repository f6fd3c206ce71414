//! Key combinations and bindings.
//!
//! A [`KeyBinding`] is built from configured key strings; key events are
//! turned into [`KeyCombo`]s and matched against it.

mod binding;
mod key_combo;

pub use binding::{Help, KeyBinding};
pub use key_combo::KeyCombo;
