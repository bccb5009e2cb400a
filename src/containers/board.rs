//! 2D grids of containers.
//!
//! A `Board` is a `width x height` grid addressed by `(x, y)`, where `y`
//! picks the row and `x` the cell within it. Every cell is a plain
//! [`Container`].
//!
//! ## Topologies
//!
//! - **Square**: every row has `width` cells.
//! - **Hex**: row `y` has `width - y / 2` cells, so the rows lose a cell
//!   every second row.
//!
//! On a hex board `x` must be inside the actual row, not just below
//! `width`. Columns are ragged: column `x` holds the cells of every row
//! long enough to have one at `x`, and there are as many columns as the
//! longest row has cells.
//!
//! ```
//! use rust_tabletop::containers::{Board, Container};
//!
//! let mut board = Board::square(3, 3);
//! let cell = Container::new();
//! let id = cell.id();
//!
//! board.set_cell(0, 0, cell).unwrap();
//! assert_eq!(board.get_cell(0, 0).unwrap().id(), id);
//! assert_eq!(board.get_rows(Some(0)).unwrap().len(), 1);
//! assert!(board.get_rows(Some(10)).is_err());
//! assert!(board.get_cell(3, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::Container;
use crate::core::{ContainerId, Error, Result};

/// Grid layout of a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Rectangular grid.
    #[default]
    Square,
    /// Rows narrowing by one cell every second row.
    Hex,
}

impl Topology {
    /// Number of cells in row `y` of a board `width` cells wide.
    #[must_use]
    pub const fn row_len(self, width: usize, y: usize) -> usize {
        match self {
            Self::Square => width,
            Self::Hex => width.saturating_sub(y / 2),
        }
    }
}

/// A grid of containers.
#[derive(Debug, Serialize, Deserialize)]
pub struct Board {
    id: ContainerId,
    name: Option<String>,
    width: usize,
    height: usize,
    topology: Topology,
    grid: Vec<Vec<Container>>,
}

impl Board {
    /// Create a board with an empty container in every cell.
    #[must_use]
    pub fn new(width: usize, height: usize, topology: Topology) -> Self {
        Self::from_fn(width, height, topology, |_, _| Container::new())
    }

    /// Create a board, calling `make(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        topology: Topology,
        mut make: impl FnMut(usize, usize) -> Container,
    ) -> Self {
        let grid: Vec<Vec<Container>> = (0..height)
            .map(|y| {
                (0..topology.row_len(width, y))
                    .map(|x| make(x, y))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            id: ContainerId::generate(),
            name: None,
            width,
            height,
            topology,
            grid,
        }
    }

    /// Create a square board.
    #[must_use]
    pub fn square(width: usize, height: usize) -> Self {
        Self::new(width, height, Topology::Square)
    }

    /// Create a hex board.
    #[must_use]
    pub fn hex(width: usize, height: usize) -> Self {
        Self::new(width, height, Topology::Hex)
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Nominal width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid layout.
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of cells in row `y`, or `None` past the last row.
    #[must_use]
    pub fn row_len(&self, y: usize) -> Option<usize> {
        self.grid.get(y).map(Vec::len)
    }

    /// The container at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<&Container> {
        self.check_bounds(x, y)?;
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .ok_or(Error::OutOfBounds { x, y })
    }

    /// The container at `(x, y)`, mutably.
    pub fn get_cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Container> {
        self.check_bounds(x, y)?;
        self.grid
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .ok_or(Error::OutOfBounds { x, y })
    }

    /// Replace the container at `(x, y)`, returning the old one.
    pub fn set_cell(&mut self, x: usize, y: usize, container: Container) -> Result<Container> {
        let cell = self.get_cell_mut(x, y)?;
        Ok(std::mem::replace(cell, container))
    }

    /// All rows, or just row `index`.
    ///
    /// Fails with `RowIndexOutOfBounds` if `index >= height`.
    pub fn get_rows(&self, index: Option<usize>) -> Result<Vec<&[Container]>> {
        match index {
            None => Ok(self.grid.iter().map(Vec::as_slice).collect()),
            Some(index) => self
                .grid
                .get(index)
                .map(|row| vec![row.as_slice()])
                .ok_or(Error::RowIndexOutOfBounds { index, height: self.height }),
        }
    }

    /// Number of columns (the length of the longest row).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All columns, or just column `index`.
    ///
    /// Fails with `ColumnIndexOutOfBounds` if `index >= column_count()`.
    pub fn get_columns(&self, index: Option<usize>) -> Result<Vec<Vec<&Container>>> {
        let columns = self.column_count();
        match index {
            None => Ok((0..columns).map(|x| self.column(x)).collect()),
            Some(index) if index < columns => Ok(vec![self.column(index)]),
            Some(index) => Err(Error::ColumnIndexOutOfBounds { index, columns }),
        }
    }

    /// Iterate over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Container> + '_ {
        self.grid.iter().flatten()
    }

    /// Iterate over every cell mutably, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Container> + '_ {
        self.grid.iter_mut().flatten()
    }

    fn column(&self, x: usize) -> Vec<&Container> {
        self.grid.iter().filter_map(|row| row.get(x)).collect()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(())
    }
}
