//! Special pay resolution: vacation, leave, and public holiday.
//!
//! Approved entries intersecting the pay period are turned into
//! supplemental paid hours and amounts. Categories overlapping on the same
//! calendar date both pay, with a warning attached so administrators can
//! audit double-paid dates.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    Classification, ComputationWarning, Employee, PayPeriod, SpecialPayEntry, SpecialPayType,
};

use super::base_pay::effective_hourly_rate;
use super::round_money;

/// Per-category hours and amounts resolved from special pay entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialPayResult {
    /// Paid vacation hours inside the period.
    pub vacation_hours: Decimal,
    /// Vacation pay.
    pub vacation_pay: Decimal,
    /// Paid leave hours inside the period.
    pub leave_hours: Decimal,
    /// Leave pay.
    pub leave_pay: Decimal,
    /// Paid public holiday hours inside the period.
    pub holiday_hours: Decimal,
    /// Public holiday pay.
    pub holiday_pay: Decimal,
    /// Warnings raised during resolution (overlaps, clamps, eligibility).
    pub warnings: Vec<ComputationWarning>,
}

impl SpecialPayResult {
    fn zeroed() -> Self {
        Self {
            vacation_hours: Decimal::ZERO,
            vacation_pay: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            leave_pay: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            warnings: vec![],
        }
    }

    /// Total special hours across all three categories.
    pub fn total_hours(&self) -> Decimal {
        self.vacation_hours + self.leave_hours + self.holiday_hours
    }

    /// Total special pay across all three categories.
    pub fn total_pay(&self) -> Decimal {
        self.vacation_pay + self.leave_pay + self.holiday_pay
    }
}

fn type_name(pay_type: SpecialPayType) -> &'static str {
    match pay_type {
        SpecialPayType::Vacation => "vacation",
        SpecialPayType::Leave => "leave",
        SpecialPayType::Holiday => "holiday",
    }
}

/// Records the dates an entry claims and warns when a different category
/// already claimed one of them. Both categories still pay.
fn note_overlaps(
    occupancy: &mut HashMap<NaiveDate, SpecialPayType>,
    warnings: &mut Vec<ComputationWarning>,
    entry: &SpecialPayEntry,
    period: &PayPeriod,
) {
    let mut date = entry.start_date.max(period.start_date);
    let end = entry.end_date.min(period.end_date);
    while date <= end {
        match occupancy.get(&date) {
            Some(&previous) if previous != entry.pay_type => {
                warnings.push(ComputationWarning {
                    code: "special_pay_overlap".to_string(),
                    message: format!(
                        "{} and {} both pay {}",
                        type_name(previous),
                        type_name(entry.pay_type),
                        date
                    ),
                });
            }
            _ => {
                occupancy.insert(date, entry.pay_type);
            }
        }
        date = match date.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
}

/// Caps a category's hours at the period's standard-hours budget, warning
/// when the cap bites. Returns the hours actually granted.
fn clamp_to_budget(
    category: SpecialPayType,
    requested: Decimal,
    already_granted: Decimal,
    budget: Decimal,
    warnings: &mut Vec<ComputationWarning>,
) -> Decimal {
    let available = (budget - already_granted).max(Decimal::ZERO);
    if requested > available {
        warnings.push(ComputationWarning {
            code: "special_hours_clamped".to_string(),
            message: format!(
                "{} hours reduced from {} to {} to fit the period budget",
                type_name(category),
                requested.normalize(),
                available.normalize()
            ),
        });
        available
    } else {
        requested
    }
}

/// Resolves approved vacation, leave, and holiday entries against the pay
/// period.
///
/// Hours are prorated by the day-overlap of the entry range with the
/// period. Vacation and leave pay hours times the entry's override rate or
/// the employee's effective hourly rate. Holiday pay is granted only when
/// the feature flag is on; its hours are one standard day per overlapping
/// holiday date (weekly standard hours over five days, or over the
/// configured nurse shifts).
///
/// Supervisors receive zero for all three categories regardless of
/// approved entries; a warning records the skipped entries.
pub fn resolve_special_pay(
    employee: &Employee,
    period: &PayPeriod,
    entries: &[SpecialPayEntry],
    rates: &RateTable,
    holiday_pay_enabled: bool,
) -> EngineResult<SpecialPayResult> {
    let mut result = SpecialPayResult::zeroed();

    let relevant: Vec<&SpecialPayEntry> = entries
        .iter()
        .filter(|e| e.employee_id == employee.id)
        .filter(|e| e.is_approved())
        .filter(|e| period.overlap_days(e.start_date, e.end_date) > 0)
        .collect();

    if relevant.is_empty() {
        return Ok(result);
    }

    if !employee.classification.special_pay_eligible() {
        result.warnings.push(ComputationWarning {
            code: "not_special_pay_eligible".to_string(),
            message: format!(
                "classification excludes special pay; {} approved entries skipped",
                relevant.len()
            ),
        });
        return Ok(result);
    }

    let effective_rate = effective_hourly_rate(employee, period, rates)?;
    let budget = period.standard_hours_for(employee);
    let daily_hours = match employee.classification {
        Classification::PrivateDutyNurse => {
            employee.standard_hours_per_week / Decimal::from(rates.nurse_shifts.shifts_per_week)
        }
        _ => employee.standard_hours_per_week / Decimal::from(5),
    };

    let mut occupancy: HashMap<NaiveDate, SpecialPayType> = HashMap::new();

    for entry in relevant {
        let overlap_days = period.overlap_days(entry.start_date, entry.end_date);

        let requested_hours = match entry.pay_type {
            SpecialPayType::Vacation | SpecialPayType::Leave => {
                entry.total_hours * Decimal::from(overlap_days) / Decimal::from(entry.days())
            }
            SpecialPayType::Holiday => {
                if !holiday_pay_enabled {
                    continue;
                }
                daily_hours * Decimal::from(overlap_days)
            }
        };

        note_overlaps(&mut occupancy, &mut result.warnings, entry, period);

        match entry.pay_type {
            SpecialPayType::Vacation => {
                let hours = clamp_to_budget(
                    entry.pay_type,
                    requested_hours,
                    result.vacation_hours,
                    budget,
                    &mut result.warnings,
                );
                let rate = entry.rate_override.unwrap_or(effective_rate);
                result.vacation_hours += hours;
                result.vacation_pay += round_money(hours * rate);
            }
            SpecialPayType::Leave => {
                let hours = clamp_to_budget(
                    entry.pay_type,
                    requested_hours,
                    result.leave_hours,
                    budget,
                    &mut result.warnings,
                );
                let rate = entry.rate_override.unwrap_or(effective_rate);
                result.leave_hours += hours;
                result.leave_pay += round_money(hours * rate);
            }
            SpecialPayType::Holiday => {
                let hours = clamp_to_budget(
                    entry.pay_type,
                    requested_hours,
                    result.holiday_hours,
                    budget,
                    &mut result.warnings,
                );
                result.holiday_hours += hours;
                result.holiday_pay += round_money(hours * effective_rate);
            }
        }
    }

    Ok(result)
}
