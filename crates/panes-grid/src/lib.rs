//! Grid manager for terminal panes.
//!
//! A [`GridManager`] owns rows of [`Pane`]s, keeps one of them active,
//! moves the active cell with directional key bindings, splits resize
//! events into per-cell sizes, forwards every other message to the active
//! pane and composes all pane views into one frame. It implements [`Pane`]
//! itself, so grids nest.

pub mod keymap;
pub mod manager;
pub mod msg;
pub mod pane;
pub mod styles;

pub use keymap::KeyMap;
pub use manager::{GridManager, Resizer, BORDER_WIDTH};
pub use msg::{Cmd, Msg};
pub use pane::Pane;
pub use styles::Styles;
