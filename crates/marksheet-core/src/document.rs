//! Document type - the in-memory snapshot a grading pass runs against

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::view::DualView;

/// An opened spreadsheet document, reduced to what grading needs: per
/// sheet, the two aligned grids, plus document-level properties.
///
/// The document-loading collaborator (out of scope here) fills this in;
/// tests construct it directly. Nothing mutates it during a grading pass.
#[derive(Debug, Default)]
pub struct Document {
    sheets: Vec<SheetGrids>,
    properties: DocumentProperties,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet and return a mutable handle for populating it
    pub fn add_sheet<S: Into<String>>(&mut self, name: S) -> &mut SheetGrids {
        self.sheets.push(SheetGrids::new(name));
        self.sheets.last_mut().unwrap()
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetGrids> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get a mutable sheet by name
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut SheetGrids> {
        self.sheets.iter_mut().find(|s| s.name() == name)
    }

    /// Iterate over sheet names in document order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name())
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a dual-grid view of the named sheet
    ///
    /// This is the accessor every check runs against. Fails if the sheet
    /// does not exist.
    pub fn dual_view(&self, name: &str) -> Result<DualView<'_>> {
        self.sheet(name)
            .map(|s| s.dual_view())
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Get the document properties
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get the document properties mutably (for loaders)
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }
}

/// One sheet's pair of aligned grids
#[derive(Debug)]
pub struct SheetGrids {
    name: String,
    evaluated: Grid,
    entered: Grid,
}

impl SheetGrids {
    /// Create a new empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            evaluated: Grid::new(),
            entered: Grid::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The evaluated grid (computed values)
    pub fn evaluated(&self) -> &Grid {
        &self.evaluated
    }

    /// The as-entered grid (typed content)
    pub fn entered(&self) -> &Grid {
        &self.entered
    }

    /// Borrow both grids as a [`DualView`]
    pub fn dual_view(&self) -> DualView<'_> {
        DualView::new(&self.evaluated, &self.entered)
    }

    /// Store a literal: the same value lands in both grids
    pub fn set_literal<V: Into<crate::CellValue> + Clone>(
        &mut self,
        addr: crate::CellAddress,
        value: V,
    ) {
        self.evaluated.set(addr, value.clone());
        self.entered.set(addr, value);
    }

    /// Store a formula: the text goes to the as-entered grid, the
    /// computed result to the evaluated grid
    pub fn set_formula<S, V>(&mut self, addr: crate::CellAddress, text: S, result: V)
    where
        S: Into<String>,
        V: Into<crate::CellValue>,
    {
        self.entered.set(addr, text.into());
        self.evaluated.set(addr, result);
    }
}

/// Document-level properties
///
/// All fields are optional: a file saved by a stripped-down tool may carry
/// none of them. Absence stays `None` end to end, never a sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Author recorded at creation
    pub creator: Option<String>,
    /// Author of the last save
    pub last_modified_by: Option<String>,
    /// Creation timestamp, naive (stored without zone, UTC by file-format
    /// convention)
    pub created: Option<NaiveDateTime>,
    /// Last-modified timestamp, naive
    pub modified: Option<NaiveDateTime>,
}
