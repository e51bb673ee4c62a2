//! Cell value types
//!
//! Unlike a general spreadsheet model, integers and floats are distinct
//! variants: grading needs to tell a typed-in `46` apart from a computed
//! `46.0`, and exact-value checks are type-sensitive by contract.

use std::fmt;

/// A value read from one of the two grids of a sheet.
///
/// In the evaluated grid a formula cell holds its last computed result.
/// In the as-entered grid it holds the formula text as [`CellValue::Text`]
/// (by convention starting with `=`, though the engine never parses it).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Integer value
    Int(i64),

    /// Floating-point value
    Float(f64),

    /// Boolean value (TRUE/FALSE)
    Bool(bool),

    /// String value; in the as-entered grid, also formula text
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Check if the value is an integer
    ///
    /// `Float(2.0)` is not an integer: the runtime type decides, not the
    /// mathematical value.
    pub fn is_int(&self) -> bool {
        matches!(self, CellValue::Int(_))
    }

    /// Get the numeric value as f64, if the value is numeric
    ///
    /// Booleans deliberately do not coerce: a student's TRUE is not a 1
    /// for tolerance comparisons.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text content, if the value is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Bool(_) => "bool",
            CellValue::Text(_) => "text",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_type_sensitive() {
        assert_eq!(CellValue::from(46), CellValue::Int(46));
        assert_ne!(CellValue::Int(46), CellValue::Text("46".into()));
        assert_ne!(CellValue::Int(46), CellValue::Float(46.0));
        assert_ne!(CellValue::Bool(true), CellValue::Int(1));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CellValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(CellValue::Float(3.14).as_f64(), Some(3.14));
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::text("42").as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
    }

    #[test]
    fn test_is_int() {
        assert!(CellValue::Int(7).is_int());
        assert!(!CellValue::Float(7.0).is_int());
        assert!(!CellValue::text("7").is_int());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Int(46).to_string(), "46");
        assert_eq!(CellValue::Bool(false).to_string(), "FALSE");
        assert_eq!(CellValue::text("=C4+D4").to_string(), "=C4+D4");
    }
}
