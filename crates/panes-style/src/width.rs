//! Display width of styled text.

use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

/// Sums the width of printable characters; escape sequences and control
/// bytes reach the other `Perform` hooks and are ignored.
#[derive(Default)]
struct WidthCounter {
    width: usize,
}

impl Perform for WidthCounter {
    fn print(&mut self, c: char) {
        self.width += c.width().unwrap_or(0);
    }
}

/// Terminal columns `s` occupies, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut parser = Parser::new();
    let mut counter = WidthCounter::default();
    parser.advance(&mut counter, s.as_bytes());
    counter.width
}

/// Split a block into lines, treating `\r\n` like `\n`.
pub(crate) fn lines(block: &str) -> Vec<&str> {
    block
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// `(width, height)` of a block: its widest line and its line count.
pub fn block_size(block: &str) -> (usize, usize) {
    let lines = lines(block);
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    (width, lines.len())
}

/// Append spaces to `line` until it is `width` columns wide.
pub(crate) fn pad_right(line: &str, width: usize) -> String {
    let missing = width.saturating_sub(visible_width(line));
    let mut out = String::with_capacity(line.len() + missing);
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(missing));
    out
}
