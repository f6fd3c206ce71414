//! Visual treatment of active and inactive cells.

use panes_config::{Align, BorderKind, StylesConfig};
use panes_style::{parse_color, Border, Position, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub active_border: Border,

    /// Anchor for cells of unequal height within a row.
    pub horizontal_join: Position,
    /// Anchor for rows of unequal width.
    pub vertical_join: Position,

    pub active: Style,
    pub inactive: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let border = Border::rounded();
        Self {
            active_border: border,
            horizontal_join: Position::TOP,
            vertical_join: Position::LEFT,
            active: Style::new().border(border),
            inactive: Style::new().padding(1),
        }
    }
}

impl Styles {
    /// Build from the `[styles]` config section. An unparseable border
    /// colour is logged and left unset.
    pub fn from_config(config: &StylesConfig) -> Self {
        let border = border_for(config.active_border);

        let mut active = Style::new().border(border);
        if let Some(name) = &config.active_border_color {
            match parse_color(name) {
                Some(color) => active = active.border_foreground(color),
                None => tracing::warn!("invalid border colour '{name}', using terminal default"),
            }
        }

        Self {
            active_border: border,
            horizontal_join: position_for(config.horizontal_join),
            vertical_join: position_for(config.vertical_join),
            active,
            inactive: Style::new().padding(config.inactive_padding),
        }
    }

    pub fn for_cell(&self, is_active: bool) -> &Style {
        if is_active {
            &self.active
        } else {
            &self.inactive
        }
    }
}

fn border_for(kind: BorderKind) -> Border {
    match kind {
        BorderKind::Normal => Border::normal(),
        BorderKind::Rounded => Border::rounded(),
        BorderKind::Thick => Border::thick(),
        BorderKind::Double => Border::double(),
        BorderKind::Hidden => Border::hidden(),
    }
}

fn position_for(align: Align) -> Position {
    match align {
        Align::Start => Position::TOP,
        Align::Center => Position::CENTER,
        Align::End => Position::BOTTOM,
    }
}
