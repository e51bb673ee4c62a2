//! # marksheet-core
//!
//! Core data structures for the marksheet grading engine.
//!
//! This crate provides the types the verification engine operates on:
//! - [`CellValue`] - Cell values with grading-grade type fidelity
//!   (integers and floats are distinct)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Grid`], [`DualView`] - The evaluated / as-entered grid pair
//! - [`Document`], [`DocumentProperties`] - The opened-document snapshot
//!
//! ## Example
//!
//! ```rust
//! use marksheet_core::{CellAddress, CellValue, Document};
//!
//! let mut doc = Document::new();
//! let sheet = doc.add_sheet("Sheet1");
//! sheet.set_literal(CellAddress::parse("C4").unwrap(), 12);
//! sheet.set_formula(CellAddress::parse("E4").unwrap(), "=C4+D4", 46);
//!
//! let view = doc.dual_view("Sheet1").unwrap();
//! let e4 = CellAddress::parse("E4").unwrap();
//! assert_eq!(*view.evaluated(e4), CellValue::Int(46));
//! ```

pub mod address;
pub mod document;
pub mod error;
pub mod grid;
pub mod value;
pub mod view;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use document::{Document, DocumentProperties, SheetGrids};
pub use error::{Error, Result};
pub use grid::Grid;
pub use value::CellValue;
pub use view::{DualCell, DualView};

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
