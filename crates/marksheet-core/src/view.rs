//! Dual-grid view of a single sheet
//!
//! Every check in the engine runs against a [`DualView`]: the evaluated
//! grid and the as-entered grid of the same sheet, borrowed together so
//! they stay aligned for the duration of a grading pass.

use crate::address::{CellAddress, CellRange};
use crate::grid::Grid;
use crate::value::CellValue;

/// Borrowed pair of aligned grids over one sheet.
///
/// `evaluated` holds computed results (formulas already resolved by the
/// loading collaborator); `entered` holds what was typed, i.e. formula
/// text where the cell is a formula and the identical literal otherwise.
#[derive(Debug, Clone, Copy)]
pub struct DualView<'a> {
    evaluated: &'a Grid,
    entered: &'a Grid,
}

impl<'a> DualView<'a> {
    /// Create a view over a pair of aligned grids
    pub fn new(evaluated: &'a Grid, entered: &'a Grid) -> Self {
        Self { evaluated, entered }
    }

    /// Look up the evaluated value at an address
    pub fn evaluated(&self, addr: CellAddress) -> &'a CellValue {
        self.evaluated.get(addr)
    }

    /// Look up the as-entered content at an address
    pub fn entered(&self, addr: CellAddress) -> &'a CellValue {
        self.entered.get(addr)
    }

    /// Look up both grids at once
    pub fn pair(&self, addr: CellAddress) -> (&'a CellValue, &'a CellValue) {
        (self.evaluated.get(addr), self.entered.get(addr))
    }

    /// Iterate over a range in row-major order, both grids in lockstep
    pub fn cells(&self, range: CellRange) -> impl Iterator<Item = DualCell<'a>> + '_ {
        range.cells().map(move |addr| DualCell {
            address: addr,
            evaluated: self.evaluated.get(addr),
            entered: self.entered.get(addr),
        })
    }
}

/// One cell as seen through both grids
#[derive(Debug, Clone, Copy)]
pub struct DualCell<'a> {
    /// The cell's address
    pub address: CellAddress,
    /// Computed value
    pub evaluated: &'a CellValue,
    /// Typed content (formula text where the cell is a formula)
    pub entered: &'a CellValue,
}

impl DualCell<'_> {
    /// Formula heuristic: the typed content differs from the computed
    /// value. A literal reads identically through both grids; a formula's
    /// typed form is its text, which in nearly all cases differs from its
    /// result. Known false negative: a formula whose text equals its
    /// result's textual form.
    pub fn looks_like_formula(&self) -> bool {
        self.evaluated != self.entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockstep_iteration() {
        let mut evaluated = Grid::new();
        let mut entered = Grid::new();
        let e4 = CellAddress::parse("E4").unwrap();
        evaluated.set(e4, 46);
        entered.set(e4, "=C4+D4");

        let view = DualView::new(&evaluated, &entered);
        let range = CellRange::parse("E4:F4").unwrap();
        let cells: Vec<_> = view.cells(range).collect();

        assert_eq!(cells.len(), 2);
        assert_eq!(*cells[0].evaluated, CellValue::Int(46));
        assert_eq!(*cells[0].entered, CellValue::text("=C4+D4"));
        assert!(cells[0].looks_like_formula());

        // F4 is blank in both grids
        assert!(cells[1].evaluated.is_empty());
        assert!(!cells[1].looks_like_formula());
    }
}
