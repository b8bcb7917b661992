//! Medical Benefits contribution calculation.
//!
//! Standard rates apply to full gross pay. Employees in the senior age
//! band pay a reduced rate with no employer match; employees at or past
//! the maximum age are outside coverage entirely.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::Employee;

use super::round_money;

/// The result of a Medical Benefits calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalBenefitsResult {
    /// Employee-side contribution.
    pub employee_amount: Decimal,
    /// Employer-side contribution.
    pub employer_amount: Decimal,
}

impl MedicalBenefitsResult {
    fn none() -> Self {
        Self {
            employee_amount: Decimal::ZERO,
            employer_amount: Decimal::ZERO,
        }
    }
}

/// Calculates Medical Benefits contributions for one period's gross pay.
///
/// The employee's age is derived from their date of birth at the pay
/// date. Exemption and the age bands are checked in order: exempt, then
/// past coverage (>= max age), then senior band, then standard rates.
pub fn calculate_medical_benefits(
    gross_pay: Decimal,
    employee: &Employee,
    pay_date: NaiveDate,
    rates: &RateTable,
) -> MedicalBenefitsResult {
    if employee.is_exempt_medical {
        return MedicalBenefitsResult::none();
    }

    let age = employee.age_on(pay_date);
    let mb = &rates.medical_benefits;

    if age >= mb.max_age {
        return MedicalBenefitsResult::none();
    }

    if age >= mb.senior_age {
        return MedicalBenefitsResult {
            employee_amount: round_money(gross_pay * mb.senior_employee_rate),
            employer_amount: Decimal::ZERO,
        };
    }

    MedicalBenefitsResult {
        employee_amount: round_money(gross_pay * mb.employee_rate),
        employer_amount: round_money(gross_pay * mb.employer_rate),
    }
}
