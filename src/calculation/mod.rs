//! Calculation logic for the payroll engine.
//!
//! This module contains the per-rule calculation functions: base gross pay
//! per employee classification, special pay resolution (vacation, leave,
//! public holiday), the three statutory deductions (Social Security,
//! Medical Benefits, Education Levy), loan amortization, and year-to-date
//! aggregation.

mod base_pay;
mod education_levy;
mod loans;
mod medical_benefits;
mod social_security;
mod special_pay;
mod ytd;

pub use base_pay::{BasePayResult, compute_base_pay, effective_hourly_rate, period_base_salary};
pub use education_levy::{EducationLevyResult, calculate_education_levy};
pub use loans::{LoanDeductionResult, LoanLedgerUpdate, calculate_loan_deductions};
pub use medical_benefits::{MedicalBenefitsResult, calculate_medical_benefits};
pub use social_security::{SocialSecurityResult, calculate_social_security};
pub use special_pay::{SpecialPayResult, resolve_special_pay};
pub use ytd::{accumulate, retract};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half-up away from zero.
///
/// Intermediate computations keep full precision; only final monetary
/// results pass through this.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("8.6415").unwrap();
/// assert_eq!(round_money(value), Decimal::from_str("8.64").unwrap());
/// let half = Decimal::from_str("2.345").unwrap();
/// assert_eq!(round_money(half), Decimal::from_str("2.35").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
