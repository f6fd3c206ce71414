//! Navigation and focus handling for GridManager.

use panes_common::{Coord, Direction};

use crate::msg::Cmd;
use crate::pane::{with_pane, Pane};

use super::GridManager;

impl GridManager {
    /// Initialize every pane and focus the active one.
    ///
    /// This is the entry point for a top-level grid. A grid nested inside
    /// another is initialized through [`Pane::init`] and focused by its
    /// parent instead.
    pub fn start(&mut self) -> Option<Cmd> {
        let cmd = Pane::init(&*self);
        self.focus_active();
        cmd
    }

    /// Move the active pane one step, stopping at the edges.
    ///
    /// Returns `true` when the active pane changed, in which case the old
    /// pane is blurred and the new one focused.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let target = self.neighbor(direction);
        if target == self.active {
            return false;
        }

        self.blur_active();
        let previous = std::mem::replace(&mut self.active, target);
        self.focus_active();
        tracing::debug!(from = %previous, to = %target, ?direction, "active pane moved");
        true
    }

    pub fn focus_active(&mut self) {
        let active = self.active;
        with_pane(self.slot_mut(active), |pane| (pane.focus(), ()));
    }

    pub fn blur_active(&mut self) {
        let active = self.active;
        with_pane(self.slot_mut(active), |pane| (pane.blur(), ()));
    }

    fn neighbor(&self, direction: Direction) -> Coord {
        let (d_row, d_col) = direction.delta();
        let Coord { row, col } = self.active;

        if direction.is_vertical() {
            let row = step(row, d_row, self.rows.len());
            // Rows are ragged; land on the nearest cell of the new row.
            let col = col.min(self.rows[row].len() - 1);
            Coord::new(row, col)
        } else {
            Coord::new(row, step(col, d_col, self.rows[row].len()))
        }
    }
}

/// `index + delta` clamped to `0..len`.
fn step(index: usize, delta: isize, len: usize) -> usize {
    index.saturating_add_signed(delta).min(len - 1)
}
