//! Base gross pay computation.
//!
//! One strategy per employee classification: salaried employees (and
//! supervisors) draw a prorated share of their period salary, hourly
//! employees split worked hours into regular and overtime, and private
//! duty nurses are paid per shift from the nurse rate matrix.

use rust_decimal::Decimal;

use crate::config::{NurseShiftRates, RateTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{Classification, Employee, EntryKind, HourEntry, PayPeriod};

use super::round_money;

/// The overtime premium applied to hourly employees.
const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1); // 1.5

/// The result of computing base pay from a period's worked hours.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePayResult {
    /// Regular hours paid at the base rate (capped at the standard-hours budget).
    pub regular_hours: Decimal,
    /// Hours beyond the standard-hours budget, paid at the overtime premium.
    pub overtime_hours: Decimal,
    /// Subtotal of hours recorded with the lunch period excluded.
    pub lunch_excluded_hours: Decimal,
    /// Base pay for the period (regular pay, or the prorated salary).
    pub base_pay: Decimal,
    /// Overtime pay at the premium rate; zero for non-eligible classifications.
    pub overtime_pay: Decimal,
}

/// The employee's base pay for one period before any proration:
/// annual salary divided by the frequency's periods per year.
pub fn period_base_salary(employee: &Employee) -> EngineResult<Decimal> {
    let monthly = employee.monthly_salary()?;
    Ok(monthly * Decimal::from(12) / Decimal::from(employee.pay_frequency.periods_per_year()))
}

/// The hourly rate used to value special pay hours for this employee.
///
/// Salaried employees derive it from the unprorated period salary over the
/// standard-hours budget; hourly employees use their contract rate; nurses
/// use the weekday day rate.
pub fn effective_hourly_rate(
    employee: &Employee,
    period: &PayPeriod,
    rates: &RateTable,
) -> EngineResult<Decimal> {
    match employee.classification {
        Classification::Salary | Classification::Supervisor => {
            let standard = period.standard_hours_for(employee);
            if standard <= Decimal::ZERO {
                return Err(EngineError::InvalidEmployee {
                    employee_id: employee.id.clone(),
                    field: "standard_hours_per_week".to_string(),
                    message: "must be positive".to_string(),
                });
            }
            Ok(period_base_salary(employee)? / standard)
        }
        Classification::Hourly => employee.hourly_rate(),
        Classification::PrivateDutyNurse => Ok(rates.nurse_shifts.weekday_day_rate),
    }
}

/// Classifies a nurse shift into the rate matrix.
///
/// Weekend shifts take the weekend rate regardless of time. Weekday shifts
/// starting inside [day_start, day_end) take the day rate, otherwise the
/// night rate. Entries without a start time are treated as day shifts.
fn nurse_shift_rate(entry: &HourEntry, rates: &NurseShiftRates) -> Decimal {
    if entry.is_weekend() {
        return rates.weekend_rate;
    }
    match entry.start_time {
        Some(start) if start >= rates.day_start && start < rates.day_end => rates.weekday_day_rate,
        Some(_) => rates.weekday_night_rate,
        None => rates.weekday_day_rate,
    }
}

/// Validates the period's hour entries and returns (worked, lunch-excluded)
/// hour totals.
fn sum_entries(employee: &Employee, entries: &[HourEntry]) -> EngineResult<(Decimal, Decimal)> {
    let mut worked = Decimal::ZERO;
    let mut lunch_excluded = Decimal::ZERO;

    for entry in entries {
        if entry.employee_id != employee.id {
            return Err(EngineError::InvalidHourEntry {
                employee_id: employee.id.clone(),
                date: entry.work_date,
                message: format!("entry belongs to employee '{}'", entry.employee_id),
            });
        }
        if entry.hours < Decimal::ZERO {
            return Err(EngineError::InvalidHourEntry {
                employee_id: employee.id.clone(),
                date: entry.work_date,
                message: "hours cannot be negative".to_string(),
            });
        }
        if entry.hours > Decimal::from(24) {
            return Err(EngineError::InvalidHourEntry {
                employee_id: employee.id.clone(),
                date: entry.work_date,
                message: "hours cannot exceed 24 in a day".to_string(),
            });
        }
        worked += entry.hours;
        if entry.kind == EntryKind::LunchExcluded {
            lunch_excluded += entry.hours;
        }
    }

    Ok((worked, lunch_excluded))
}

/// Computes base gross pay for one employee over one period.
///
/// `special_hours` is the total of the period's paid special hours
/// (vacation, leave, holiday); for salaried classifications it counts
/// toward the proration numerator so an employee on approved leave is not
/// docked for the hours the leave covers. Proration never scales upward
/// beyond the full period salary.
///
/// # Errors
///
/// Returns `InvalidHourEntry` for malformed entries and `InvalidEmployee`
/// when the classification's compensation field is missing. Either failure
/// is local to this employee; the orchestrator records it in the run
/// manifest and continues.
pub fn compute_base_pay(
    employee: &Employee,
    period: &PayPeriod,
    entries: &[HourEntry],
    rates: &RateTable,
    special_hours: Decimal,
) -> EngineResult<BasePayResult> {
    let (worked, lunch_excluded) = sum_entries(employee, entries)?;
    let standard = period.standard_hours_for(employee);

    match employee.classification {
        Classification::Salary | Classification::Supervisor => {
            let period_base = period_base_salary(employee)?;
            let base_pay = if worked < standard {
                let ratio = ((worked + special_hours) / standard).min(Decimal::ONE);
                round_money(period_base * ratio)
            } else {
                round_money(period_base)
            };

            Ok(BasePayResult {
                regular_hours: worked.min(standard),
                overtime_hours: Decimal::ZERO,
                lunch_excluded_hours: lunch_excluded,
                base_pay,
                overtime_pay: Decimal::ZERO,
            })
        }
        Classification::Hourly => {
            let rate = employee.hourly_rate()?;
            let regular_hours = worked.min(standard);
            let overtime_hours = worked - regular_hours;

            Ok(BasePayResult {
                regular_hours,
                overtime_hours,
                lunch_excluded_hours: lunch_excluded,
                base_pay: round_money(regular_hours * rate),
                overtime_pay: round_money(overtime_hours * rate * OVERTIME_MULTIPLIER),
            })
        }
        Classification::PrivateDutyNurse => {
            let mut total = Decimal::ZERO;
            for entry in entries {
                total += entry.hours * nurse_shift_rate(entry, &rates.nurse_shifts);
            }

            // Shift rates already encode the differentials; there is no
            // separate overtime premium for nurses.
            Ok(BasePayResult {
                regular_hours: worked,
                overtime_hours: Decimal::ZERO,
                lunch_excluded_hours: lunch_excluded,
                base_pay: round_money(total),
                overtime_pay: Decimal::ZERO,
            })
        }
    }
}
