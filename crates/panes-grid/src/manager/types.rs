//! Core types and constructors for GridManager.

use std::fmt;

use panes_common::{Coord, GridError, Size};
use panes_config::PanesConfig;

use crate::keymap::KeyMap;
use crate::pane::Pane;
use crate::styles::Styles;

use super::resize::Resizer;

/// Lays out panes in rows, each row holding any number of cells.
pub struct GridManager {
    /// Row-major pane storage. Never empty, and no row is empty.
    pub(super) rows: Vec<Vec<Box<dyn Pane>>>,
    /// One per row, built at construction.
    pub(super) resizers: Vec<Resizer>,
    /// Always inside `rows`.
    pub(super) active: Coord,
    pub keymap: KeyMap,
    pub styles: Styles,
}

impl GridManager {
    /// Take ownership of `rows` and start at `(0, 0)`.
    ///
    /// Panes are stored as given; call [`GridManager::start`] (or
    /// [`Pane::init`] when nesting) to initialize them.
    pub fn new(rows: Vec<Vec<Box<dyn Pane>>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if let Some(index) = rows.iter().position(Vec::is_empty) {
            return Err(GridError::EmptyRow(index));
        }

        let resizers = rows
            .iter()
            .map(|row| Resizer::new(row.len(), rows.len()))
            .collect();

        let grid = Self {
            rows,
            resizers,
            active: Coord::default(),
            keymap: KeyMap::default(),
            styles: Styles::default(),
        };
        tracing::debug!(shape = ?grid.shape(), "grid created");
        Ok(grid)
    }

    /// Like [`GridManager::new`], with key bindings and styles taken from
    /// `config`.
    pub fn with_config(
        rows: Vec<Vec<Box<dyn Pane>>>,
        config: &PanesConfig,
    ) -> Result<Self, GridError> {
        Ok(Self::new(rows)?
            .with_keymap(KeyMap::from_config(&config.keys))
            .with_styles(Styles::from_config(&config.styles)))
    }

    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    // -- Accessors --

    pub fn active(&self) -> Coord {
        self.active
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in `row`, or `None` past the last row.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Cell count of every row, top to bottom.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    pub fn pane_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn pane(&self, at: Coord) -> Option<&dyn Pane> {
        self.rows.get(at.row)?.get(at.col).map(|pane| pane.as_ref())
    }

    pub fn active_pane(&self) -> &dyn Pane {
        self.rows[self.active.row][self.active.col].as_ref()
    }

    /// Size handed to every pane in `row` when the grid is given `total`.
    pub fn cell_size(&self, row: usize, total: Size) -> Option<Size> {
        self.resizers.get(row).map(|resizer| resizer.apply(total))
    }

    pub(super) fn slot_mut(&mut self, at: Coord) -> &mut Box<dyn Pane> {
        &mut self.rows[at.row][at.col]
    }
}

impl fmt::Debug for GridManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridManager")
            .field("shape", &self.shape())
            .field("active", &self.active)
            .field("keymap", &self.keymap)
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
