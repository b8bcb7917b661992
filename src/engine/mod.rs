//! Run orchestration, overrides, persistence seam, and ACH export.
//!
//! The [`PayrollEngine`] sequences the calculation modules per employee,
//! applies authorized overrides, and persists runs atomically through the
//! [`PayrollStore`] trait.

mod ach;
mod orchestrator;
mod overrides;
mod store;

pub use ach::{AchBatch, AchEntry, build_ach_batch};
pub use orchestrator::{EmployeeInputs, PayrollEngine, RunOutcome, RunRequest};
pub use overrides::{PayOverride, apply_override};
pub use store::{InMemoryStore, PayrollStore};
