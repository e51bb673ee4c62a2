//! Convenient re-exports for scoring scripts
//!
//! ```
//! use marksheet::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::metadata::{created_and_modified, creator_and_last_modifier};
pub use crate::outcome::RangeOutcome;
pub use crate::predicates::{is_formula, is_given_value, is_integer};
pub use crate::ranges::{
    check_composite_or_absolute_reference_in_range, check_formulas_in_range,
    check_function_in_range, check_values_in_range, check_values_in_range_float,
    entered_in_range, values_in_range, DEFAULT_FLOAT_TOLERANCE,
};
pub use marksheet_core::{
    CellAddress, CellRange, CellValue, Document, DocumentProperties, DualView, Grid, SheetGrids,
};
