use panes_common::Coord;
use panes_style::{join_horizontal, join_vertical};

use super::GridManager;

impl GridManager {
    /// Render every pane through its cell style and stitch the results
    /// into one frame.
    pub fn compose(&self) -> String {
        let rows: Vec<String> = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(c, pane)| {
                        let style = self.styles.for_cell(self.active == Coord::new(r, c));
                        style.render(&pane.view())
                    })
                    .collect();
                join_horizontal(self.styles.horizontal_join, &cells)
            })
            .collect();

        join_vertical(self.styles.vertical_join, &rows)
    }
}
