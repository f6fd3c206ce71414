//! A minimal multi-line text entry pane for the demo grid.

use panes_common::Size;
use panes_grid::{Cmd, Msg, Pane};
use panes_input::KeyCombo;

const CURSOR: char = '█';

pub struct TextPane {
    placeholder: String,
    /// Never empty; the last line holds the cursor.
    lines: Vec<String>,
    size: Size,
    focused: bool,
}

impl TextPane {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            lines: vec![String::new()],
            size: Size::default(),
            focused: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn handle_key(&mut self, combo: &KeyCombo) {
        match combo.key.as_str() {
            "Enter" => self.lines.push(String::new()),
            "Backspace" => self.backspace(),
            _ => {
                if let Some(c) = combo.text() {
                    self.insert(c);
                }
            }
        }
    }

    fn insert(&mut self, c: char) {
        if c == '\n' {
            self.lines.push(String::new());
        } else if let Some(line) = self.lines.last_mut() {
            line.push(c);
        }
    }

    fn backspace(&mut self) {
        let emptied = match self.lines.last_mut() {
            Some(line) => line.pop().is_none(),
            None => false,
        };
        if emptied && self.lines.len() > 1 {
            self.lines.pop();
        }
    }
}

/// Truncate or pad `line` to exactly `width` characters.
fn fit(line: &str, width: usize) -> String {
    let mut out: String = line.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

impl Pane for TextPane {
    fn update(mut self: Box<Self>, msg: Msg) -> (Box<dyn Pane>, Option<Cmd>) {
        match msg {
            Msg::Resize(size) => self.size = size,
            Msg::Key(combo) if self.focused => self.handle_key(&combo),
            Msg::Paste(text) if self.focused => text.chars().for_each(|c| self.insert(c)),
            _ => {}
        }
        (self, None)
    }

    fn view(&self) -> String {
        let mut lines = if self.is_empty() && !self.focused {
            vec![self.placeholder.clone()]
        } else {
            self.lines.clone()
        };
        if self.focused {
            if let Some(last) = lines.last_mut() {
                last.push(CURSOR);
            }
        }

        // Not laid out yet.
        if self.size == Size::default() {
            return lines.join("\n");
        }

        let width = usize::from(self.size.width);
        let height = usize::from(self.size.height);
        let skip = lines.len().saturating_sub(height);
        let mut visible: Vec<String> = lines.iter().skip(skip).map(|l| fit(l, width)).collect();
        visible.resize(height, " ".repeat(width));
        visible.join("\n")
    }

    fn focus(mut self: Box<Self>) -> Box<dyn Pane> {
        self.focused = true;
        self
    }

    fn blur(mut self: Box<Self>) -> Box<dyn Pane> {
        self.focused = false;
        self
    }
}
