//! Text block styling for terminal panes.
//!
//! Blocks are plain strings of `\n`-separated lines. [`Style`] pads and
//! borders a block; [`join_horizontal`] and [`join_vertical`] place blocks
//! side by side or stacked, aligning the shorter ones by a [`Position`].

pub mod border;
pub mod color;
pub mod join;
pub mod style;
pub mod width;

pub use border::Border;
pub use color::parse_color;
pub use join::{join_horizontal, join_vertical, Position};
pub use style::{Edges, Style};
pub use width::{block_size, visible_width};
