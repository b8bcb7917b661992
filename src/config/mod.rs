//! Statutory rate configuration for the payroll engine.
//!
//! Rates are loaded from a YAML snapshot and treated as an immutable value
//! for the duration of a run.

mod loader;
mod types;

pub use loader::RateTableLoader;
pub use types::{
    EducationLevyRates, MedicalBenefitsRates, NurseShiftRates, RateTable, SocialSecurityRates,
};

#[cfg(test)]
pub(crate) use types::test_support;
