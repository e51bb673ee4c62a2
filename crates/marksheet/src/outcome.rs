//! Range check outcome

/// Result of a range aggregator: how many cells were examined and how
/// many passed.
///
/// Callers divide `passing / examined` to get a partial-credit fraction;
/// [`RangeOutcome::fraction`] encodes the empty-range guard.
///
/// For [`check_function_in_range`](crate::ranges::check_function_in_range)
/// `examined` counts rows, not cells - see that function's docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeOutcome {
    /// Cells (or rows, for the function check) examined
    pub examined: u32,
    /// Cells that passed the check
    pub passing: u32,
}

impl RangeOutcome {
    /// Create an outcome
    pub fn new(examined: u32, passing: u32) -> Self {
        Self { examined, passing }
    }

    /// Fractional score, `None` when nothing was examined
    pub fn fraction(&self) -> Option<f64> {
        if self.examined == 0 {
            None
        } else {
            Some(self.passing as f64 / self.examined as f64)
        }
    }

    /// True when every examined cell passed (and at least one was examined)
    pub fn all_passing(&self) -> bool {
        self.examined > 0 && self.passing >= self.examined
    }
}

impl From<RangeOutcome> for (u32, u32) {
    fn from(o: RangeOutcome) -> Self {
        (o.examined, o.passing)
    }
}
