//! The GridManager owns a ragged grid of panes, tracks which one is
//! active, and routes messages between the host runtime and the panes.
//!
//! Messages are handled in priority order: quit, resize (broadcast to every
//! pane with a per-row size), navigation (consumed by the grid), then
//! anything else goes to the active pane alone.

mod dispatch;
mod focus;
mod nesting;
mod resize;
mod types;
mod view;

pub use resize::{Resizer, BORDER_WIDTH};
pub use types::*;

#[cfg(test)]
mod tests;
