/// Characters used to draw a box around a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl Border {
    pub const fn normal() -> Self {
        Self {
            top: "─",
            bottom: "─",
            left: "│",
            right: "│",
            top_left: "┌",
            top_right: "┐",
            bottom_left: "└",
            bottom_right: "┘",
        }
    }

    pub const fn rounded() -> Self {
        Self {
            top_left: "╭",
            top_right: "╮",
            bottom_left: "╰",
            bottom_right: "╯",
            ..Self::normal()
        }
    }

    pub const fn thick() -> Self {
        Self {
            top: "━",
            bottom: "━",
            left: "┃",
            right: "┃",
            top_left: "┏",
            top_right: "┓",
            bottom_left: "┗",
            bottom_right: "┛",
        }
    }

    pub const fn double() -> Self {
        Self {
            top: "═",
            bottom: "═",
            left: "║",
            right: "║",
            top_left: "╔",
            top_right: "╗",
            bottom_left: "╚",
            bottom_right: "╝",
        }
    }

    /// Occupies the same space as a visible border but draws nothing.
    pub const fn hidden() -> Self {
        Self {
            top: " ",
            bottom: " ",
            left: " ",
            right: " ",
            top_left: " ",
            top_right: " ",
            bottom_left: " ",
            bottom_right: " ",
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::normal()
    }
}
