//! The capability set every grid cell provides.

use crate::msg::{Cmd, Msg};

/// One interactive unit occupying a grid cell.
///
/// `update`, `focus` and `blur` consume the current state and hand back its
/// replacement, which may be a different concrete type (an error pane
/// standing in for one that failed, for instance). The grid stores whatever
/// comes back.
pub trait Pane {
    /// Called once before first use. The default starts nothing.
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(self: Box<Self>, msg: Msg) -> (Box<dyn Pane>, Option<Cmd>);

    fn view(&self) -> String;

    /// The pane became the active pane.
    fn focus(self: Box<Self>) -> Box<dyn Pane>;

    /// The pane stopped being the active pane.
    fn blur(self: Box<Self>) -> Box<dyn Pane>;
}

/// Placeholder left in a slot while its pane is moved out for a
/// consuming call.
struct Vacant;

impl Pane for Vacant {
    fn update(self: Box<Self>, _msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        (self, None)
    }

    fn view(&self) -> String {
        String::new()
    }

    fn focus(self: Box<Self>) -> Box<dyn Pane> {
        self
    }

    fn blur(self: Box<Self>) -> Box<dyn Pane> {
        self
    }
}

/// Move the pane out of `slot`, run `f` on it and store the pane `f`
/// returns.
pub(crate) fn with_pane<R>(
    slot: &mut Box<dyn Pane>,
    f: impl FnOnce(Box<dyn Pane>) -> (Box<dyn Pane>, R),
) -> R {
    let pane = std::mem::replace(slot, Box::new(Vacant));
    let (next, out) = f(pane);
    *slot = next;
    out
}
