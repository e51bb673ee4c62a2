//! Single-cell predicates
//!
//! Each predicate takes the dual view and an A1-style address string,
//! parses the address, and returns a boolean verdict. Only a malformed
//! address is an error; blank cells and wrong types are plain `false`.

use log::trace;
use marksheet_core::{CellAddress, CellValue, DualView};

use crate::error::Result;

/// True iff the evaluated value at `addr` equals `expected` exactly.
///
/// Equality is type-and-value: an integer `46` does not match the text
/// `"46"` nor the float `46.0`. A blank cell never matches a non-empty
/// expected value.
///
/// ```
/// use marksheet::predicates::is_given_value;
/// use marksheet_core::{CellAddress, Document};
///
/// let mut doc = Document::new();
/// doc.add_sheet("Sheet1")
///     .set_formula(CellAddress::parse("E4").unwrap(), "=C4+D4", 46);
/// let view = doc.dual_view("Sheet1").unwrap();
///
/// assert!(is_given_value(&view, "E4", 46).unwrap());
/// assert!(!is_given_value(&view, "E4", "46").unwrap());
/// ```
pub fn is_given_value<V: Into<CellValue>>(
    view: &DualView<'_>,
    addr: &str,
    expected: V,
) -> Result<bool> {
    let addr = CellAddress::parse(addr)?;
    let expected = expected.into();
    let actual = view.evaluated(addr);
    trace!(
        "is_given_value {}: actual={} expected={}",
        addr,
        actual,
        expected
    );
    Ok(*actual == expected)
}

/// True iff the cell at `addr` holds a formula.
///
/// Heuristic: the as-entered content differs from the evaluated value. A
/// literal reads identically through both grids; a formula's as-entered
/// form is its text, which in nearly all cases differs from the computed
/// result. Known false negative: a formula whose text equals its result's
/// textual form. The formula itself is never parsed, so `=C4+D4` and
/// `=D4+C4` are indistinguishable here.
pub fn is_formula(view: &DualView<'_>, addr: &str) -> Result<bool> {
    let addr = CellAddress::parse(addr)?;
    let (evaluated, entered) = view.pair(addr);
    Ok(evaluated != entered)
}

/// True iff the evaluated value at `addr` is an integer.
///
/// The runtime type decides: a float that happens to be whole fails, as
/// does text that parses as a number.
pub fn is_integer(view: &DualView<'_>, addr: &str) -> Result<bool> {
    let addr = CellAddress::parse(addr)?;
    Ok(view.evaluated(addr).is_int())
}
