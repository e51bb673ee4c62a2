//! Range aggregators
//!
//! Each aggregator walks a rectangular range row-major and returns a
//! [`RangeOutcome`] so the scoring layer can award partial credit. Blank
//! cells never pass anything; they are never treated as zero.

use log::debug;
use marksheet_core::{CellAddress, CellRange, CellValue, DualView};

use crate::error::{Error, Result};
use crate::outcome::RangeOutcome;

/// Default tolerance for [`check_values_in_range_float`]
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 0.01;

/// Check a range against a row-major table of expected values, cell by
/// cell under exact (type-and-value) equality.
///
/// The table must have exactly one entry per cell of the range; a
/// mismatched shape fails with [`Error::ShapeMismatch`] before any cell
/// is examined.
pub fn check_values_in_range(
    view: &DualView<'_>,
    range: &str,
    expected: &[Vec<CellValue>],
) -> Result<RangeOutcome> {
    let range = CellRange::parse(range)?;
    check_table_shape(&range, expected, |row| row.len())?;

    let mut outcome = RangeOutcome::default();
    for (cell, want) in view.cells(range).zip(expected.iter().flatten()) {
        outcome.examined += 1;
        if cell.evaluated == want {
            outcome.passing += 1;
        }
    }
    debug!("check_values_in_range {}: {:?}", range, outcome);
    Ok(outcome)
}

/// Check a range against a row-major table of expected numbers, with an
/// inclusive symmetric tolerance.
///
/// A cell passes iff it is numeric (integer or float) and
/// `|actual - expected| <= tolerance`. Text, booleans, and blank cells
/// never pass. Pass [`DEFAULT_FLOAT_TOLERANCE`] unless the assignment
/// says otherwise.
pub fn check_values_in_range_float(
    view: &DualView<'_>,
    range: &str,
    expected: &[Vec<f64>],
    tolerance: f64,
) -> Result<RangeOutcome> {
    let range = CellRange::parse(range)?;
    check_table_shape(&range, expected, |row| row.len())?;

    let mut outcome = RangeOutcome::default();
    for (cell, want) in view.cells(range).zip(expected.iter().flatten()) {
        outcome.examined += 1;
        if let Some(actual) = cell.evaluated.as_f64() {
            if (actual - want).abs() <= tolerance {
                outcome.passing += 1;
            }
        }
    }
    debug!(
        "check_values_in_range_float {} (tolerance {}): {:?}",
        range, tolerance, outcome
    );
    Ok(outcome)
}

/// Count the cells in a range that hold formulas.
///
/// Per cell, the same heuristic as
/// [`is_formula`](crate::predicates::is_formula): as-entered content
/// differing from the evaluated value.
pub fn check_formulas_in_range(view: &DualView<'_>, range: &str) -> Result<RangeOutcome> {
    let range = CellRange::parse(range)?;

    let mut outcome = RangeOutcome::default();
    for cell in view.cells(range) {
        outcome.examined += 1;
        if cell.looks_like_formula() {
            outcome.passing += 1;
        }
    }
    debug!("check_formulas_in_range {}: {:?}", range, outcome);
    Ok(outcome)
}

/// Count the cells in a range whose as-entered content mentions a
/// function by name.
///
/// Matching is plain substring over the typed text: `SUM` matches inside
/// `SUMIF` and `=SUM(...)` alike. That conflation is deliberate and load
/// bearing - scoring scripts rely on it staying this coarse.
///
/// `examined` counts **rows** iterated, not cells; `passing` still counts
/// cells. The two coincide for single-column ranges, which is how scoring
/// scripts use this check. Callers grading a wider range must account for
/// the difference.
pub fn check_function_in_range(
    view: &DualView<'_>,
    range: &str,
    function_name: &str,
) -> Result<RangeOutcome> {
    let range = CellRange::parse(range)?;

    let mut outcome = RangeOutcome::default();
    for row in range.rows() {
        outcome.examined += 1;
        for col in range.cols() {
            if let Some(text) = view.entered(CellAddress::new(row, col)).as_text()
            {
                if text.contains(function_name) {
                    outcome.passing += 1;
                }
            }
        }
    }
    debug!(
        "check_function_in_range {} '{}': {:?}",
        range, function_name, outcome
    );
    Ok(outcome)
}

/// Count the cells in a range whose as-entered content uses an absolute
/// or mixed cell reference (`$A$1`, `A$1`, `$A1`).
///
/// Same substring semantics (and the same per-row `examined` count) as
/// [`check_function_in_range`], with `$` as the needle.
pub fn check_composite_or_absolute_reference_in_range(
    view: &DualView<'_>,
    range: &str,
) -> Result<RangeOutcome> {
    check_function_in_range(view, range, "$")
}

/// Snapshot the evaluated values of a range, row-major.
///
/// Diagnostic companion to the checks: lets a report show what the
/// student's sheet actually computed.
pub fn values_in_range(view: &DualView<'_>, range: &str) -> Result<Vec<Vec<CellValue>>> {
    let range = CellRange::parse(range)?;
    Ok(collect_rows(&range, |row, col| {
        view.evaluated(CellAddress::new(row, col)).clone()
    }))
}

/// Snapshot the as-entered content of a range, row-major.
///
/// Formula cells yield their formula text.
pub fn entered_in_range(view: &DualView<'_>, range: &str) -> Result<Vec<Vec<CellValue>>> {
    let range = CellRange::parse(range)?;
    Ok(collect_rows(&range, |row, col| {
        view.entered(CellAddress::new(row, col)).clone()
    }))
}

fn collect_rows<F>(range: &CellRange, mut f: F) -> Vec<Vec<CellValue>>
where
    F: FnMut(u32, u16) -> CellValue,
{
    range
        .rows()
        .map(|row| range.cols().map(|col| f(row, col)).collect())
        .collect()
}

/// Fail fast when the expected table does not cover the range exactly
fn check_table_shape<R>(
    range: &CellRange,
    table: &[R],
    row_len: impl Fn(&R) -> usize,
) -> Result<()> {
    let rows = range.row_count();
    let cols = range.col_count();

    let mismatch = |actual_cols: usize| Error::ShapeMismatch {
        expected_rows: rows,
        expected_cols: cols,
        actual_rows: table.len(),
        actual_cols,
    };

    if table.len() != rows as usize {
        return Err(mismatch(table.first().map(&row_len).unwrap_or(0)));
    }
    for row in table {
        if row_len(row) != cols as usize {
            return Err(mismatch(row_len(row)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marksheet_core::{CellAddress, Document};
    use pretty_assertions::assert_eq;

    /// Two rows of data in C..D with sum formulas in E, one hard-coded
    fn sample_doc() -> Document {
        let mut doc = Document::new();
        let sheet = doc.add_sheet("Sheet1");
        sheet.set_literal(CellAddress::parse("C4").unwrap(), 12);
        sheet.set_literal(CellAddress::parse("D4").unwrap(), 34);
        sheet.set_formula(CellAddress::parse("E4").unwrap(), "=C4+D4", 46);
        sheet.set_literal(CellAddress::parse("C5").unwrap(), 10);
        sheet.set_literal(CellAddress::parse("D5").unwrap(), 20);
        // Student typed the answer instead of a formula
        sheet.set_literal(CellAddress::parse("E5").unwrap(), 30);
        sheet.set_formula(
            CellAddress::parse("E19").unwrap(),
            "=AVERAGE(C19:D19)",
            23.0,
        );
        doc
    }

    fn table(rows: &[&[i64]]) -> Vec<Vec<CellValue>> {
        rows.iter()
            .map(|r| r.iter().map(|&n| CellValue::Int(n)).collect())
            .collect()
    }

    #[test]
    fn test_check_values_in_range() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        let outcome =
            check_values_in_range(&view, "C4:D5", &table(&[&[12, 34], &[10, 20]])).unwrap();
        assert_eq!(outcome, RangeOutcome::new(4, 4));

        let outcome =
            check_values_in_range(&view, "C4:D5", &table(&[&[12, 99], &[10, 20]])).unwrap();
        assert_eq!(outcome, RangeOutcome::new(4, 3));

        // Single-cell range with a 1x1 table, formula result counts
        let outcome = check_values_in_range(&view, "E4", &table(&[&[46]])).unwrap();
        assert_eq!(outcome, RangeOutcome::new(1, 1));
    }

    #[test]
    fn test_check_values_shape_mismatch() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        // Too few rows
        let err = check_values_in_range(&view, "C4:D5", &table(&[&[12, 34]])).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));

        // Ragged row
        let err =
            check_values_in_range(&view, "C4:D5", &table(&[&[12, 34], &[10]])).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected_cols: 2,
                actual_cols: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_check_values_blank_cells_never_pass() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        let outcome = check_values_in_range(&view, "H1:H2", &table(&[&[0], &[0]])).unwrap();
        assert_eq!(outcome, RangeOutcome::new(2, 0));
    }

    #[test]
    fn test_check_values_float_tolerance_inclusive() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet("Sheet1");
        sheet.set_formula(CellAddress::parse("A1").unwrap(), "=X1*Y1", 23.009);
        sheet.set_formula(CellAddress::parse("A2").unwrap(), "=X2*Y2", 23.02);
        sheet.set_literal(CellAddress::parse("A3").unwrap(), 23); // int still numeric
        sheet.set_literal(CellAddress::parse("A4").unwrap(), "23.0"); // text never passes
        let view = doc.dual_view("Sheet1").unwrap();

        let expected = vec![vec![23.0], vec![23.0], vec![23.0], vec![23.0]];
        let outcome =
            check_values_in_range_float(&view, "A1:A4", &expected, DEFAULT_FLOAT_TOLERANCE)
                .unwrap();
        // A1 within tolerance, A2 out by 0.02, A3 integer exact, A4 text
        assert_eq!(outcome, RangeOutcome::new(4, 2));
    }

    #[test]
    fn test_check_formulas_in_range() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        // E4 is a formula, E5 was typed in as a literal
        let outcome = check_formulas_in_range(&view, "E4:E5").unwrap();
        assert_eq!(outcome, RangeOutcome::new(2, 1));

        // Blank range: nothing passes, everything examined
        let outcome = check_formulas_in_range(&view, "H1:H3").unwrap();
        assert_eq!(outcome, RangeOutcome::new(3, 0));
    }

    #[test]
    fn test_check_function_in_range_substring() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        let outcome = check_function_in_range(&view, "E19", "AVERAGE").unwrap();
        assert_eq!(outcome, RangeOutcome::new(1, 1));

        // Not a SUM formula
        let outcome = check_function_in_range(&view, "E19", "SUM").unwrap();
        assert_eq!(outcome, RangeOutcome::new(1, 0));
    }

    #[test]
    fn test_check_function_conflates_substrings() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet("Sheet1");
        sheet.set_formula(CellAddress::parse("A1").unwrap(), "=SUMIF(B:B,\">0\")", 10);
        let view = doc.dual_view("Sheet1").unwrap();

        // SUM is a substring of SUMIF, and that is the documented behavior
        let outcome = check_function_in_range(&view, "A1", "SUM").unwrap();
        assert_eq!(outcome, RangeOutcome::new(1, 1));
    }

    #[test]
    fn test_check_function_examined_counts_rows() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet("Sheet1");
        sheet.set_formula(CellAddress::parse("A1").unwrap(), "=SUM(C:C)", 1);
        sheet.set_formula(CellAddress::parse("B1").unwrap(), "=SUM(D:D)", 2);
        let view = doc.dual_view("Sheet1").unwrap();

        // One row, two columns: examined is per-row, passing per-cell
        let outcome = check_function_in_range(&view, "A1:B1", "SUM").unwrap();
        assert_eq!(outcome, RangeOutcome::new(1, 2));
    }

    #[test]
    fn test_check_absolute_reference() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet("Sheet1");
        sheet.set_formula(CellAddress::parse("A1").unwrap(), "=$B$1*C1", 5);
        sheet.set_formula(CellAddress::parse("A2").unwrap(), "=B2*C2", 6);
        let view = doc.dual_view("Sheet1").unwrap();

        let outcome =
            check_composite_or_absolute_reference_in_range(&view, "A1:A2").unwrap();
        assert_eq!(outcome, RangeOutcome::new(2, 1));
    }

    #[test]
    fn test_snapshots() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();

        let values = values_in_range(&view, "C4:E4").unwrap();
        assert_eq!(
            values,
            vec![vec![
                CellValue::Int(12),
                CellValue::Int(34),
                CellValue::Int(46)
            ]]
        );

        let entered = entered_in_range(&view, "C4:E4").unwrap();
        assert_eq!(
            entered,
            vec![vec![
                CellValue::Int(12),
                CellValue::Int(34),
                CellValue::text("=C4+D4")
            ]]
        );
    }

    #[test]
    fn test_bad_range_string() {
        let doc = sample_doc();
        let view = doc.dual_view("Sheet1").unwrap();
        assert!(check_formulas_in_range(&view, "A1:").is_err());
        assert!(check_function_in_range(&view, "::", "SUM").is_err());
    }
}
