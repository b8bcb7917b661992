//! Normalized attendance hour entries.
//!
//! Hour entries arrive from the attendance collaborator already normalized:
//! decimal hours with lunch exclusions applied. The engine consumes them
//! as-is and never revalidates the source attendance format.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Distinguishes ordinary worked hours from hours recorded with the lunch
/// period already excluded. Both kinds are paid; the split is carried
/// through to the payroll item for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Plain worked hours.
    Ordinary,
    /// Worked hours recorded net of an excluded lunch period.
    LunchExcluded,
}

/// A single day's worked hours for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EntryKind, HourEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = HourEntry {
///     employee_id: "emp_001".to_string(),
///     work_date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(), // a Saturday
///     hours: Decimal::new(80, 1),
///     kind: EntryKind::Ordinary,
///     start_time: None,
/// };
/// assert!(entry.is_weekend());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourEntry {
    /// The employee the hours belong to.
    pub employee_id: String,
    /// The calendar date the hours were worked.
    pub work_date: NaiveDate,
    /// Decimal hours worked on that date.
    pub hours: Decimal,
    /// Whether the entry already excludes a lunch period.
    pub kind: EntryKind,
    /// Shift start time, when the attendance source records one. Needed to
    /// classify private-duty-nurse shifts into the day window; entries
    /// without a start time are treated as day-window shifts.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
}

impl HourEntry {
    /// Returns true if the work date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.work_date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entry_on(date: &str) -> HourEntry {
        HourEntry {
            employee_id: "emp_001".to_string(),
            work_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            hours: Decimal::from_str("8").unwrap(),
            kind: EntryKind::Ordinary,
            start_time: None,
        }
    }

    #[test]
    fn test_weekday_is_not_weekend() {
        // 2025-03-05 is a Wednesday
        assert!(!entry_on("2025-03-05").is_weekend());
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        assert!(entry_on("2025-03-08").is_weekend());
        assert!(entry_on("2025-03-09").is_weekend());
    }

    #[test]
    fn test_deserialize_with_start_time() {
        let json = r#"{
            "employee_id": "emp_001",
            "work_date": "2025-03-05",
            "hours": "7.5",
            "kind": "lunch_excluded",
            "start_time": "19:30:00"
        }"#;
        let entry: HourEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::LunchExcluded);
        assert_eq!(
            entry.start_time,
            Some(NaiveTime::from_hms_opt(19, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_without_start_time() {
        let json = r#"{
            "employee_id": "emp_001",
            "work_date": "2025-03-05",
            "hours": "8",
            "kind": "ordinary"
        }"#;
        let entry: HourEntry = serde_json::from_str(json).unwrap();
        assert!(entry.start_time.is_none());
    }
}
