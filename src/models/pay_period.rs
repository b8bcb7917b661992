//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date range
//! a payroll run covers and the standard-hours budget derived from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Represents a pay period with its inclusive date range.
///
/// The (start, end) pair is the period fingerprint used for duplicate-run
/// prevention.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The number of calendar days in the period, inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// The number of calendar days a date range shares with this period.
    ///
    /// Returns 0 when the range does not intersect the period.
    pub fn overlap_days(&self, range_start: NaiveDate, range_end: NaiveDate) -> i64 {
        let start = self.start_date.max(range_start);
        let end = self.end_date.min(range_end);
        if start > end {
            0
        } else {
            (end - start).num_days() + 1
        }
    }

    /// The standard-hours budget for this period for the given employee:
    /// weekly standard hours scaled by the pay frequency's weeks per period.
    pub fn standard_hours_for(&self, employee: &Employee) -> Decimal {
        employee.standard_hours_per_week * employee.pay_frequency.weeks_per_period()
    }
}
