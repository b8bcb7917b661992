//! Payroll run and payroll item models.
//!
//! A [`PayrollRun`] owns the [`PayrollItem`] records produced for it, one
//! per employee. Items become immutable once the run is finalized.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle state of a payroll run.
///
/// Runs are created `Processing`, become `Completed` or
/// `CompletedWithErrors` once every employee has been processed, and may
/// be made `Finalized` (terminal) by explicit administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Computation in progress.
    Processing,
    /// Every employee computed successfully.
    Completed,
    /// At least one employee failed; successful items were kept.
    CompletedWithErrors,
    /// Terminal; recomputation and deletion are forbidden.
    Finalized,
}

impl RunStatus {
    /// Returns true for the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Finalized)
    }

    /// Returns true if the run completed without a full error manifest,
    /// i.e. it blocks a duplicate run for the same period fingerprint.
    pub fn blocks_duplicate(&self) -> bool {
        !matches!(self, RunStatus::CompletedWithErrors)
    }
}

/// A payroll run covering one pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// Start of the covered pay period (inclusive).
    pub period_start: NaiveDate,
    /// End of the covered pay period (inclusive).
    pub period_end: NaiveDate,
    /// The date employees are paid.
    pub pay_date: NaiveDate,
    /// The lifecycle state of the run.
    pub status: RunStatus,
    /// The number of employees with a persisted item in this run.
    pub employee_count: u32,
    /// Sum of paid gross across the run's items.
    pub total_gross: Decimal,
    /// Sum of paid net across the run's items.
    pub total_net: Decimal,
}

/// A warning attached to a payroll item during computation.
///
/// Warnings flag conditions that do not prevent payment but may need
/// administrative attention, such as double-paid calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The computed payroll result for one employee in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollItem {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// The run this item belongs to.
    pub run_id: Uuid,
    /// The employee this item pays.
    pub employee_id: String,

    /// Regular worked hours for the period.
    pub regular_hours: Decimal,
    /// Overtime hours for the period.
    pub overtime_hours: Decimal,
    /// Paid vacation hours.
    pub vacation_hours: Decimal,
    /// Paid leave hours (sick, maternity, compassionate).
    pub leave_hours: Decimal,
    /// Paid public holiday hours.
    pub holiday_hours: Decimal,
    /// Worked hours recorded with the lunch period excluded.
    pub lunch_excluded_hours: Decimal,

    /// Base pay for regular hours (or prorated salary).
    pub base_pay: Decimal,
    /// Overtime pay at the premium rate.
    pub overtime_pay: Decimal,
    /// Vacation pay.
    pub vacation_pay: Decimal,
    /// Leave pay.
    pub leave_pay: Decimal,
    /// Public holiday pay.
    pub holiday_pay: Decimal,
    /// Gross pay: base + overtime + vacation + leave + holiday.
    pub gross_pay: Decimal,

    /// Social Security, employee side.
    pub ss_employee: Decimal,
    /// Social Security, employer side.
    pub ss_employer: Decimal,
    /// Medical Benefits, employee side.
    pub mb_employee: Decimal,
    /// Medical Benefits, employer side.
    pub mb_employer: Decimal,
    /// Education Levy (employee only).
    pub education_levy: Decimal,

    /// Loan deduction kept internal.
    pub loan_internal: Decimal,
    /// Loan deduction remitted to third parties.
    pub loan_third_party: Decimal,

    /// Administrator-substituted gross, when overridden.
    pub override_gross: Option<Decimal>,
    /// Administrator-substituted net, when overridden.
    pub override_net: Option<Decimal>,
    /// The mandatory reason recorded with an override.
    pub override_reason: Option<String>,
    /// The administrator who authorized an override.
    pub override_actor: Option<String>,

    /// Computed net pay: gross minus employee-side deductions and loans.
    pub net_pay: Decimal,

    /// Employee's year-to-date gross after this run.
    pub ytd_gross_pay: Decimal,
    /// Employee's year-to-date net after this run.
    pub ytd_net_pay: Decimal,

    /// Ledger entries generated for this item (non-owning references).
    #[serde(default)]
    pub loan_payment_ids: Vec<Uuid>,
    /// Warnings raised while computing this item.
    #[serde(default)]
    pub warnings: Vec<ComputationWarning>,
}

impl PayrollItem {
    /// The gross amount actually paid: the override when present,
    /// otherwise the computed gross.
    pub fn paid_gross(&self) -> Decimal {
        self.override_gross.unwrap_or(self.gross_pay)
    }

    /// The net amount actually paid: the override when present,
    /// otherwise the computed net.
    pub fn paid_net(&self) -> Decimal {
        self.override_net.unwrap_or(self.net_pay)
    }

    /// Total employee-side statutory deductions.
    pub fn statutory_deductions(&self) -> Decimal {
        self.ss_employee + self.mb_employee + self.education_levy
    }

    /// Total loan deduction across both loan types.
    pub fn loan_total(&self) -> Decimal {
        self.loan_internal + self.loan_third_party
    }

    /// Returns true if an administrator override was applied.
    pub fn has_override(&self) -> bool {
        self.override_net.is_some()
    }
}

/// One entry in a run's error manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFailure {
    /// The employee whose computation failed.
    pub employee_id: String,
    /// The failure reason, in the words of the underlying error.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn zeroed_item() -> PayrollItem {
        PayrollItem {
            id: Uuid::new_v4(),
            run_id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            vacation_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            lunch_excluded_hours: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            vacation_pay: Decimal::ZERO,
            leave_pay: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            ss_employee: Decimal::ZERO,
            ss_employer: Decimal::ZERO,
            mb_employee: Decimal::ZERO,
            mb_employer: Decimal::ZERO,
            education_levy: Decimal::ZERO,
            loan_internal: Decimal::ZERO,
            loan_third_party: Decimal::ZERO,
            override_gross: None,
            override_net: None,
            override_reason: None,
            override_actor: None,
            net_pay: Decimal::ZERO,
            ytd_gross_pay: Decimal::ZERO,
            ytd_net_pay: Decimal::ZERO,
            loan_payment_ids: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_paid_net_prefers_override() {
        let mut item = zeroed_item();
        item.net_pay = dec("900.00");
        assert_eq!(item.paid_net(), dec("900.00"));

        item.override_net = Some(dec("1000.00"));
        assert_eq!(item.paid_net(), dec("1000.00"));
        assert!(item.has_override());
    }

    #[test]
    fn test_paid_gross_prefers_override() {
        let mut item = zeroed_item();
        item.gross_pay = dec("1200.00");
        item.override_gross = Some(dec("1300.00"));
        assert_eq!(item.paid_gross(), dec("1300.00"));
    }

    #[test]
    fn test_statutory_deductions_sum() {
        let mut item = zeroed_item();
        item.ss_employee = dec("70.00");
        item.mb_employee = dec("35.00");
        item.education_levy = dec("12.50");
        assert_eq!(item.statutory_deductions(), dec("117.50"));
    }

    #[test]
    fn test_loan_total_sums_both_types() {
        let mut item = zeroed_item();
        item.loan_internal = dec("100.00");
        item.loan_third_party = dec("50.00");
        assert_eq!(item.loan_total(), dec("150.00"));
    }

    #[test]
    fn test_completed_with_errors_does_not_block_duplicates() {
        assert!(RunStatus::Processing.blocks_duplicate());
        assert!(RunStatus::Completed.blocks_duplicate());
        assert!(RunStatus::Finalized.blocks_duplicate());
        assert!(!RunStatus::CompletedWithErrors.blocks_duplicate());
    }

    #[test]
    fn test_only_finalized_is_terminal() {
        assert!(RunStatus::Finalized.is_terminal());
        assert!(!RunStatus::Completed.is_terminal());
        assert!(!RunStatus::CompletedWithErrors.is_terminal());
        assert!(!RunStatus::Processing.is_terminal());
    }

    #[test]
    fn test_run_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RunStatus::CompletedWithErrors).unwrap(),
            "\"completed_with_errors\""
        );
    }

    #[test]
    fn test_item_serialization_round_trip() {
        let mut item = zeroed_item();
        item.gross_pay = dec("2400.00");
        item.warnings.push(ComputationWarning {
            code: "special_pay_overlap".to_string(),
            message: "vacation and leave overlap on 2025-03-12".to_string(),
        });

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: PayrollItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
