//! Message routing for GridManager.

use panes_common::Size;

use crate::msg::{Cmd, Msg};
use crate::pane::with_pane;

use super::GridManager;

impl GridManager {
    /// Route one message and return the follow-up command, if any.
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        if let Msg::Key(combo) = &msg {
            if self.keymap.is_quit(combo) {
                tracing::debug!(key = %combo, "quit requested");
                return Some(Cmd::Quit);
            }
        }

        if let Msg::Resize(total) = msg {
            return self.broadcast_resize(total);
        }

        if let Some(direction) = msg.key().and_then(|combo| self.keymap.direction(combo)) {
            self.navigate(direction);
            return None;
        }

        let active = self.active;
        with_pane(self.slot_mut(active), |pane| pane.update(msg))
    }

    /// Deliver a per-row resize to every pane in row-major order.
    fn broadcast_resize(&mut self, total: Size) -> Option<Cmd> {
        tracing::debug!(%total, "resizing grid");
        let mut cmds = Vec::with_capacity(self.pane_count());
        for (row, resizer) in self.rows.iter_mut().zip(&self.resizers) {
            let cell = resizer.apply(total);
            for slot in row.iter_mut() {
                cmds.push(with_pane(slot, |pane| pane.update(Msg::Resize(cell))));
            }
        }
        Cmd::batch(cmds)
    }
}
