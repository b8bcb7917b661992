//! Year-to-date summary model.
//!
//! One [`YtdSummary`] exists per employee per calendar year. It is updated
//! additively once per run and is never rebuilt by rescanning history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running year totals for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YtdSummary {
    /// The employee the totals belong to.
    pub employee_id: String,
    /// The calendar year the totals cover.
    pub year: i32,
    /// Cumulative paid gross.
    pub gross_pay: Decimal,
    /// Cumulative paid net.
    pub net_pay: Decimal,
    /// Cumulative regular hours.
    pub regular_hours: Decimal,
    /// Cumulative overtime hours.
    pub overtime_hours: Decimal,
    /// Cumulative vacation hours.
    pub vacation_hours: Decimal,
    /// Cumulative leave hours.
    pub leave_hours: Decimal,
    /// Cumulative holiday hours.
    pub holiday_hours: Decimal,
    /// Cumulative Social Security, employee side.
    pub ss_employee: Decimal,
    /// Cumulative Medical Benefits, employee side.
    pub mb_employee: Decimal,
    /// Cumulative Education Levy.
    pub education_levy: Decimal,
    /// Cumulative loan deductions (both types).
    pub loan_deductions: Decimal,
}

impl YtdSummary {
    /// A zero-initialized summary for an employee and year.
    pub fn new(employee_id: impl Into<String>, year: i32) -> Self {
        Self {
            employee_id: employee_id.into(),
            year,
            gross_pay: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            vacation_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            ss_employee: Decimal::ZERO,
            mb_employee: Decimal::ZERO,
            education_levy: Decimal::ZERO,
            loan_deductions: Decimal::ZERO,
        }
    }
}
