//! Statutory Payroll Calculation Engine for Antigua and Barbuda
//!
//! This crate turns normalized attendance data plus employee and rate
//! configuration into an auditable payroll run: base gross pay per
//! employee classification, vacation/leave/holiday pay, the three
//! statutory deductions (Social Security, Medical Benefits, Education
//! Levy), loan amortization, and year-to-date aggregation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
