use crossterm::style::{Color, Stylize};

use crate::border::Border;
use crate::width::{lines, pad_right, visible_width};

/// Space on each side of a block, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn all(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }
}

/// Padding and border applied around a rendered block.
///
/// Builder-style: every setter consumes and returns the style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    border: Option<Border>,
    border_fg: Option<Color>,
    padding: Edges,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_foreground(mut self, color: Color) -> Self {
        self.border_fg = Some(color);
        self
    }

    /// Same padding on all four sides.
    pub fn padding(mut self, n: u16) -> Self {
        self.padding = Edges::all(n);
        self
    }

    pub fn padding_edges(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn get_border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    pub fn get_padding(&self) -> Edges {
        self.padding
    }

    /// Columns and rows the style adds around its content.
    pub fn frame_size(&self) -> (usize, usize) {
        let border = usize::from(self.border.is_some()) * 2;
        let p = self.padding;
        (
            usize::from(p.left) + usize::from(p.right) + border,
            usize::from(p.top) + usize::from(p.bottom) + border,
        )
    }

    /// Render `text` inside this style.
    ///
    /// Lines are left-aligned and padded to the widest line. Content is never
    /// truncated or wrapped.
    pub fn render(&self, text: &str) -> String {
        let content = lines(text);
        let content_width = content.iter().map(|l| visible_width(l)).max().unwrap_or(0);

        let p = self.padding;
        let inner_width = content_width + usize::from(p.left) + usize::from(p.right);
        let left_pad = " ".repeat(usize::from(p.left));
        let right_pad = " ".repeat(usize::from(p.right));
        let blank = " ".repeat(inner_width);

        let mut body: Vec<String> = Vec::with_capacity(content.len() + 2);
        body.extend(std::iter::repeat(blank.clone()).take(usize::from(p.top)));
        for line in content {
            body.push(format!("{left_pad}{}{right_pad}", pad_right(line, content_width)));
        }
        body.extend(std::iter::repeat(blank).take(usize::from(p.bottom)));

        let Some(b) = self.border else {
            return body.join("\n");
        };

        let paint = |s: String| match self.border_fg {
            Some(color) => s.with(color).to_string(),
            None => s,
        };

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(paint(format!(
            "{}{}{}",
            b.top_left,
            b.top.repeat(inner_width),
            b.top_right
        )));
        for line in body {
            out.push(format!(
                "{}{line}{}",
                paint(b.left.to_string()),
                paint(b.right.to_string())
            ));
        }
        out.push(paint(format!(
            "{}{}{}",
            b.bottom_left,
            b.bottom.repeat(inner_width),
            b.bottom_right
        )));
        out.join("\n")
    }
}
