//! Sparse cell grid

use ahash::AHashMap;

use crate::address::CellAddress;
use crate::value::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A single read-mostly view of a sheet: a sparse mapping from cell
/// coordinates to values. Absent cells read as [`CellValue::Empty`].
#[derive(Debug, Default)]
pub struct Grid {
    cells: AHashMap<(u32, u16), CellValue>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value
    pub fn set<V: Into<CellValue>>(&mut self, addr: CellAddress, value: V) {
        self.set_at(addr.row, addr.col, value);
    }

    /// Set a cell value by row and column indices
    pub fn set_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) {
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    /// Get a cell value; absent cells are empty
    pub fn get(&self, addr: CellAddress) -> &CellValue {
        self.get_at(addr.row, addr.col)
    }

    /// Get a cell value by row and column indices
    pub fn get_at(&self, row: u32, col: u16) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY_CELL)
    }

    /// Number of non-empty cells stored
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid stores no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cells_read_as_empty() {
        let grid = Grid::new();
        assert_eq!(*grid.get_at(0, 0), CellValue::Empty);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        let addr = CellAddress::parse("E4").unwrap();
        grid.set(addr, 46);
        assert_eq!(*grid.get(addr), CellValue::Int(46));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_setting_empty_clears() {
        let mut grid = Grid::new();
        grid.set_at(0, 0, "hello");
        grid.set_at(0, 0, CellValue::Empty);
        assert!(grid.is_empty());
    }
}
