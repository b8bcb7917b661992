//! Domain models for the payroll calculation engine.
//!
//! This module contains the core data types: employees, pay periods,
//! attendance hour entries, special pay entries, loans, payroll runs and
//! items, and year-to-date summaries.

mod employee;
mod hour_entry;
mod loan;
mod pay_period;
mod payroll;
mod special_pay;
mod ytd;

pub use employee::{BankAccount, Classification, Employee, EmploymentStatus, PayFrequency};
pub use hour_entry::{EntryKind, HourEntry};
pub use loan::{Loan, LoanPayment, LoanStatus, LoanType};
pub use pay_period::PayPeriod;
pub use payroll::{ComputationWarning, PayrollItem, PayrollRun, RunFailure, RunStatus};
pub use special_pay::{ApprovalStatus, SpecialPayEntry, SpecialPayType};
pub use ytd::YtdSummary;
