use panes_common::Size;

/// Cells drawn around each pane on every side.
pub const BORDER_WIDTH: u16 = 1;

/// Splits the grid's total size among the cells of one row.
///
/// Every row gets an equal share of the height and its cells get equal
/// shares of the width, less room for a border on each side. Shares too
/// small for the border come out as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resizer {
    /// Cells in this row.
    pub cells: usize,
    /// Rows in the grid.
    pub rows: usize,
}

impl Resizer {
    pub fn new(cells: usize, rows: usize) -> Self {
        Self { cells, rows }
    }

    pub fn apply(&self, total: Size) -> Size {
        Size::new(share(total.width, self.cells), share(total.height, self.rows))
    }
}

fn share(total: u16, parts: usize) -> u16 {
    let parts = u16::try_from(parts).unwrap_or(u16::MAX).max(1);
    (total / parts).saturating_sub(2 * BORDER_WIDTH)
}
