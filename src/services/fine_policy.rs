//! Late-fee policy - pure calculation, no I/O

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Computes the fine owed for a late return.
///
/// A return is only fined when it is more than `grace_days` past the due
/// date. Once fined, the amount is `daily_rate` times the *full* number of
/// late days - the grace day waives the charge entirely but is still billed
/// when a fine applies. That is the billing behavior libraries running this
/// system rely on, so it is kept as is (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinePolicy {
    pub daily_rate: Decimal,
    pub grace_days: i64,
}

impl Default for FinePolicy {
    fn default() -> Self {
        FinePolicy {
            daily_rate: dec!(20),
            grace_days: 1,
        }
    }
}

impl FinePolicy {
    pub fn new(daily_rate: Decimal, grace_days: i64) -> Self {
        FinePolicy {
            daily_rate,
            grace_days,
        }
    }

    /// Fine for a loan due on `due_date` and returned on `return_date`.
    ///
    /// `None` when no fine is owed. Never negative; an early return is
    /// simply not fined. Callers must not invoke this for open loans.
    pub fn compute_fine(&self, due_date: NaiveDate, return_date: NaiveDate) -> Option<Decimal> {
        let late_days = (return_date - due_date).num_days();

        if late_days <= self.grace_days {
            return None;
        }

        Some(self.daily_rate * Decimal::from(late_days))
    }
}
