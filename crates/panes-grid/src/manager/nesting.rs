//! A grid is itself a pane, so grids can be placed inside grids.

use crate::msg::{Cmd, Msg};
use crate::pane::Pane;

use super::GridManager;

impl Pane for GridManager {
    /// Batches the children's start-up commands in row-major order.
    fn init(&self) -> Option<Cmd> {
        Cmd::batch(self.rows.iter().flatten().map(|pane| pane.init()))
    }

    fn update(mut self: Box<Self>, msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        let cmd = self.dispatch(msg);
        (self, cmd)
    }

    fn view(&self) -> String {
        self.compose()
    }

    fn focus(mut self: Box<Self>) -> Box<dyn Pane> {
        self.focus_active();
        self
    }

    fn blur(mut self: Box<Self>) -> Box<dyn Pane> {
        self.blur_active();
        self
    }
}
