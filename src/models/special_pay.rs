//! Special pay entries: vacation, leave, and public holiday.
//!
//! These records come from the leave-management collaborator. Only
//! approved entries participate in computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of a special pay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialPayType {
    /// Paid vacation.
    Vacation,
    /// Paid leave (sick, maternity, compassionate).
    Leave,
    /// Public holiday pay.
    Holiday,
}

/// The approval state of a special pay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting approval; not paid.
    Pending,
    /// Approved; participates in computation.
    Approved,
    /// Rejected; not paid.
    Rejected,
}

/// An approved (or pending) block of vacation, leave, or holiday time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPayEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The category of special pay.
    pub pay_type: SpecialPayType,
    /// First day of the entry (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the entry (inclusive).
    pub end_date: NaiveDate,
    /// Total hours covered by the entry across its full date range.
    pub total_hours: Decimal,
    /// Explicit hourly rate override; when absent the employee's
    /// effective hourly rate applies.
    #[serde(default)]
    pub rate_override: Option<Decimal>,
    /// Approval state; only approved entries are paid.
    pub status: ApprovalStatus,
}

impl SpecialPayEntry {
    /// Returns true if the entry is approved for payment.
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// The number of calendar days in the entry's range, inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
