use crate::width::{lines, pad_right, visible_width};

/// Anchor along an axis, from `0.0` (top/left) to `1.0` (bottom/right).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Position(f64);

impl Position {
    pub const TOP: Position = Position(0.0);
    pub const BOTTOM: Position = Position(1.0);
    pub const LEFT: Position = Position(0.0);
    pub const RIGHT: Position = Position(1.0);
    pub const CENTER: Position = Position(0.5);

    /// Clamped into `[0.0, 1.0]`; NaN becomes `0.0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Split `extra` spare cells into `(before, after)` for this anchor.
    fn split(self, extra: usize) -> (usize, usize) {
        let before = (extra as f64 * self.0).round() as usize;
        let before = before.min(extra);
        (before, extra - before)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::TOP
    }
}

/// Place blocks side by side.
///
/// Shorter blocks get blank lines above and below according to `pos`
/// (`TOP` keeps them flush with the top edge). Every block keeps its own
/// width.
pub fn join_horizontal<S: AsRef<str>>(pos: Position, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let split: Vec<Vec<&str>> = blocks.iter().map(|b| lines(b.as_ref())).collect();
    let widths: Vec<usize> = split
        .iter()
        .map(|ls| ls.iter().map(|l| visible_width(l)).max().unwrap_or(0))
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0);

    let columns: Vec<Vec<String>> = split
        .iter()
        .zip(&widths)
        .map(|(ls, &width)| {
            let (above, below) = pos.split(height - ls.len());
            let blank = " ".repeat(width);
            std::iter::repeat(blank.clone())
                .take(above)
                .chain(ls.iter().map(|l| pad_right(l, width)))
                .chain(std::iter::repeat(blank).take(below))
                .collect()
        })
        .collect();

    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|col| col[row].as_str())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stack blocks top to bottom.
///
/// Narrower lines are padded on the left and right according to `pos`
/// (`LEFT` keeps them flush with the left edge).
pub fn join_vertical<S: AsRef<str>>(pos: Position, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let all: Vec<&str> = blocks.iter().flat_map(|b| lines(b.as_ref())).collect();
    let width = all.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    all.iter()
        .map(|line| {
            let (left, right) = pos.split(width - visible_width(line));
            format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
