//! Per-record sum and average.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places the average is carried with.
pub const AVERAGE_SCALE: u32 = 2;

const SUBJECT_COUNT: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// The three subject scores of one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub language: Decimal,
    pub math: Decimal,
    pub english: Decimal,
}

/// Derived statistics for one set of [`Scores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub sum: Decimal,
    pub average: Decimal,
}

impl Scores {
    /// Sum and average, or `None` if the sum exceeds the decimal range.
    pub fn totals(&self) -> Option<Totals> {
        let sum = self.sum()?;
        Some(Totals {
            sum,
            average: average(sum),
        })
    }

    pub fn sum(&self) -> Option<Decimal> {
        self.language.checked_add(self.math)?.checked_add(self.english)
    }
}

/// Divides by the fixed subject count and rounds half to even, always
/// yielding exactly [`AVERAGE_SCALE`] decimal places.
pub fn average(sum: Decimal) -> Decimal {
    let mut avg = (sum / SUBJECT_COUNT)
        .round_dp_with_strategy(AVERAGE_SCALE, RoundingStrategy::MidpointNearestEven);
    avg.rescale(AVERAGE_SCALE);
    avg
}
