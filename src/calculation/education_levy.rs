//! Education Levy calculation.
//!
//! The levy is a two-tier deduction on gross pay above a fixed exemption.
//! Threshold and exemption are defined at the monthly reference frequency
//! and scaled proportionally to the employee's pay-period length.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::PayFrequency;

use super::round_money;

/// The result of an Education Levy calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationLevyResult {
    /// The levy owed for the period.
    pub levy: Decimal,
    /// Gross pay less the scaled exemption (floored at zero).
    pub taxable_base: Decimal,
}

/// Calculates the Education Levy for one period's gross pay.
///
/// The taxable base is gross pay minus the scaled exemption, floored at
/// zero. Up to the scaled threshold the base is levied at the low rate;
/// anything above it at the high rate:
///
/// ```text
/// levy = base * low                                  if base <= threshold
/// levy = threshold * low + (base - threshold) * high otherwise
/// ```
pub fn calculate_education_levy(
    gross_pay: Decimal,
    frequency: PayFrequency,
    rates: &RateTable,
) -> EducationLevyResult {
    let scale = frequency.statutory_scale();
    let el = &rates.education_levy;
    let threshold = el.monthly_threshold * scale;
    let exemption = el.monthly_exemption * scale;

    let taxable_base = (gross_pay - exemption).max(Decimal::ZERO);

    let levy = if taxable_base <= threshold {
        taxable_base * el.low_rate
    } else {
        threshold * el.low_rate + (taxable_base - threshold) * el.high_rate
    };

    EducationLevyResult {
        levy: round_money(levy),
        taxable_base,
    }
}
