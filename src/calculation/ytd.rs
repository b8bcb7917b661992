//! Year-to-date aggregation.
//!
//! Each run contributes exactly once to an employee's year totals via
//! [`accumulate`]; deleting a run reverses its contribution via
//! [`retract`]. Totals are never rebuilt by rescanning history.

use crate::models::{PayrollItem, YtdSummary};

/// Adds a payroll item's contribution to the running year totals.
///
/// Monetary fields use the paid amounts, so an administrator override is
/// what lands in the year totals.
pub fn accumulate(summary: &mut YtdSummary, item: &PayrollItem) {
    summary.gross_pay += item.paid_gross();
    summary.net_pay += item.paid_net();
    summary.regular_hours += item.regular_hours;
    summary.overtime_hours += item.overtime_hours;
    summary.vacation_hours += item.vacation_hours;
    summary.leave_hours += item.leave_hours;
    summary.holiday_hours += item.holiday_hours;
    summary.ss_employee += item.ss_employee;
    summary.mb_employee += item.mb_employee;
    summary.education_levy += item.education_levy;
    summary.loan_deductions += item.loan_total();
}

/// Subtracts a prior run's contribution from the running year totals.
///
/// The exact inverse of [`accumulate`] for the same item.
pub fn retract(summary: &mut YtdSummary, item: &PayrollItem) {
    summary.gross_pay -= item.paid_gross();
    summary.net_pay -= item.paid_net();
    summary.regular_hours -= item.regular_hours;
    summary.overtime_hours -= item.overtime_hours;
    summary.vacation_hours -= item.vacation_hours;
    summary.leave_hours -= item.leave_hours;
    summary.holiday_hours -= item.holiday_hours;
    summary.ss_employee -= item.ss_employee;
    summary.mb_employee -= item.mb_employee;
    summary.education_levy -= item.education_levy;
    summary.loan_deductions -= item.loan_total();
}
