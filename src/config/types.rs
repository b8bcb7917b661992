//! Statutory rate table types.
//!
//! This module contains the strongly-typed rate table that is deserialized
//! from the YAML snapshot file. A run loads the table once and passes it by
//! reference into every computation, so results stay reproducible even if
//! settings change elsewhere mid-run.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Social Security contribution rates and the insurable-earnings ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialSecurityRates {
    /// Employee contribution rate (fraction of insurable earnings).
    pub employee_rate: Decimal,
    /// Employer contribution rate (fraction of insurable earnings).
    pub employer_rate: Decimal,
    /// Maximum insurable earnings per month; scaled to the pay period.
    pub monthly_insurable_ceiling: Decimal,
}

/// Medical Benefits contribution rates and age boundaries.
#[derive(Debug, Clone, Deserialize)]
pub struct MedicalBenefitsRates {
    /// Standard employee contribution rate.
    pub employee_rate: Decimal,
    /// Standard employer contribution rate.
    pub employer_rate: Decimal,
    /// Reduced employee rate for seniors; employer pays nothing.
    pub senior_employee_rate: Decimal,
    /// Age at which the senior rate starts (inclusive).
    pub senior_age: u32,
    /// Age at which coverage ends (exclusive upper bound of the senior band).
    pub max_age: u32,
}

/// Education Levy tier rates, threshold, and exemption.
///
/// The threshold and exemption are defined at the monthly reference
/// frequency and scaled proportionally to the employee's pay period.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationLevyRates {
    /// Rate applied to taxable income at or below the threshold.
    pub low_rate: Decimal,
    /// Rate applied to taxable income above the threshold.
    pub high_rate: Decimal,
    /// Monthly income threshold between the two tiers.
    pub monthly_threshold: Decimal,
    /// Monthly fixed exemption subtracted before the tiers apply.
    pub monthly_exemption: Decimal,
}

/// Private duty nurse shift rates and the day-shift window.
#[derive(Debug, Clone, Deserialize)]
pub struct NurseShiftRates {
    /// Hourly rate for weekday shifts starting inside the day window.
    pub weekday_day_rate: Decimal,
    /// Hourly rate for weekday shifts starting outside the day window.
    pub weekday_night_rate: Decimal,
    /// Hourly rate for weekend shifts (any time of day).
    pub weekend_rate: Decimal,
    /// Start of the day-shift window (inclusive).
    pub day_start: NaiveTime,
    /// End of the day-shift window (exclusive).
    pub day_end: NaiveTime,
    /// Configured nurse shifts per week; divisor for holiday hours.
    pub shifts_per_week: u32,
}

/// The complete statutory rate table for one snapshot.
///
/// The table is immutable per run: orchestration loads it once and every
/// calculation receives it as an explicit argument.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// A label identifying the snapshot (e.g. "2025-01").
    pub version: String,
    /// The date these rates took effect.
    pub effective_date: NaiveDate,
    /// Social Security section.
    pub social_security: SocialSecurityRates,
    /// Medical Benefits section.
    pub medical_benefits: MedicalBenefitsRates,
    /// Education Levy section.
    pub education_levy: EducationLevyRates,
    /// Private duty nurse shift section.
    pub nurse_shifts: NurseShiftRates,
}
