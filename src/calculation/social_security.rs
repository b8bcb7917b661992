//! Social Security contribution calculation.
//!
//! Contributions are levied on insurable earnings: gross pay capped at the
//! maximum insurable ceiling, which is defined monthly and scaled to the
//! employee's pay-period length.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::Employee;

use super::round_money;

/// The result of a Social Security calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialSecurityResult {
    /// Employee-side contribution.
    pub employee_amount: Decimal,
    /// Employer-side contribution.
    pub employer_amount: Decimal,
    /// The insurable base the rates were applied to.
    pub insurable_base: Decimal,
}

impl SocialSecurityResult {
    fn exempt() -> Self {
        Self {
            employee_amount: Decimal::ZERO,
            employer_amount: Decimal::ZERO,
            insurable_base: Decimal::ZERO,
        }
    }
}

/// Calculates Social Security contributions for one period's gross pay.
///
/// Exempt employees contribute nothing on either side. Otherwise both
/// rates apply to `min(gross, ceiling)` where the monthly ceiling is
/// scaled by the pay frequency.
pub fn calculate_social_security(
    gross_pay: Decimal,
    employee: &Employee,
    rates: &RateTable,
) -> SocialSecurityResult {
    if employee.is_exempt_ss {
        return SocialSecurityResult::exempt();
    }

    let ceiling =
        rates.social_security.monthly_insurable_ceiling * employee.pay_frequency.statutory_scale();
    let insurable_base = gross_pay.min(ceiling);

    SocialSecurityResult {
        employee_amount: round_money(insurable_base * rates.social_security.employee_rate),
        employer_amount: round_money(insurable_base * rates.social_security.employer_rate),
        insurable_base,
    }
}
