//! # marksheet
//!
//! A verification engine for grading spreadsheet assignments.
//!
//! A grading pass works over a [`Document`](marksheet_core::Document)
//! snapshot holding, per sheet, two aligned grids: the **evaluated** grid
//! (formulas resolved to their computed values) and the **as-entered**
//! grid (the literal typed content, formula text included). The engine
//! compares the two to decide whether an answer is numerically right,
//! whether it was produced by a formula rather than typed in, and whether
//! a required function shows up in the formula text.
//!
//! Single-cell checks return booleans; range checks return
//! [`RangeOutcome`](outcome::RangeOutcome) pairs of (examined, passing)
//! so a scoring layer can award partial credit.
//!
//! ## Example
//!
//! ```rust
//! use marksheet::prelude::*;
//!
//! // A loader fills this in from a real workbook; here we build it by hand.
//! let mut doc = Document::new();
//! let sheet = doc.add_sheet("Sheet1");
//! sheet.set_literal(CellAddress::parse("C4").unwrap(), 12);
//! sheet.set_literal(CellAddress::parse("D4").unwrap(), 34);
//! sheet.set_formula(CellAddress::parse("E4").unwrap(), "=C4+D4", 46);
//!
//! let view = doc.dual_view("Sheet1").unwrap();
//! assert!(is_given_value(&view, "E4", 46).unwrap());
//! assert!(is_formula(&view, "E4").unwrap());
//! ```
//!
//! ## What this engine cannot grade
//!
//! Formulas are never parsed. `=C4+D4`, `=D4+C4`, and `=SUM(C4:D4)` are
//! mathematically the same answer, but only their computed values can be
//! compared; the texts cannot be judged equivalent. Function detection is
//! plain substring search over the typed text, so `SUM` also matches
//! `SUMIF`. Both limitations are permanent and documented on the
//! functions they affect.

pub mod error;
pub mod metadata;
pub mod outcome;
pub mod predicates;
pub mod prelude;
pub mod ranges;

pub use error::{Error, Result};
pub use outcome::RangeOutcome;

// Re-export the data model so scoring scripts need only this crate
pub use marksheet_core as core;
pub use marksheet_core::{
    CellAddress, CellRange, CellValue, Document, DocumentProperties, DualView,
};
