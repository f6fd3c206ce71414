//! Messages flowing into panes and commands flowing back out.

use std::any::Any;
use std::fmt;

use panes_common::Size;
use panes_input::KeyCombo;

/// An inbound event.
pub enum Msg {
    Key(KeyCombo),
    /// New total size of the area the receiver is laid out in.
    Resize(Size),
    Paste(String),
    /// Application-defined payload, usually produced by a [`Cmd::Perform`].
    Custom(Box<dyn Any + Send>),
}

impl Msg {
    pub fn custom<T: Any + Send>(value: T) -> Self {
        Msg::Custom(Box::new(value))
    }

    pub fn key(&self) -> Option<&KeyCombo> {
        match self {
            Msg::Key(combo) => Some(combo),
            _ => None,
        }
    }

    /// Borrow a custom payload as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Msg::Custom(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::Key(combo) => f.debug_tuple("Key").field(combo).finish(),
            Msg::Resize(size) => f.debug_tuple("Resize").field(size).finish(),
            Msg::Paste(text) => f.debug_tuple("Paste").field(text).finish(),
            Msg::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A follow-up command returned to the host runtime, which executes it.
pub enum Cmd {
    Quit,
    Batch(Vec<Cmd>),
    /// Work to run off the event loop; its result is delivered back as a
    /// message.
    Perform(Box<dyn FnOnce() -> Msg + Send>),
}

impl Cmd {
    pub fn perform<F>(f: F) -> Self
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        Cmd::Perform(Box::new(f))
    }

    /// Combine optional commands: `None` entries are dropped, a single
    /// survivor is returned as-is, and nothing at all yields `None`.
    pub fn batch<I>(cmds: I) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        let mut cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cmd::Quit => f.write_str("Quit"),
            Cmd::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Cmd::Perform(_) => f.write_str("Perform(..)"),
        }
    }
}
