//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or inconsistent with its classification.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee the invalid record belongs to.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An hour entry was malformed (negative hours, wrong employee, etc.).
    #[error("Invalid hour entry for employee '{employee_id}' on {date}: {message}")]
    InvalidHourEntry {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The work date of the invalid entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A general calculation error occurred (e.g. a negative computed value).
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A payroll run already covers this period fingerprint.
    #[error("A payroll run already covers the period {start} to {end}")]
    DuplicateRun {
        /// The start date of the conflicting period.
        start: NaiveDate,
        /// The end date of the conflicting period.
        end: NaiveDate,
    },

    /// The requested payroll run does not exist.
    #[error("Payroll run not found: {run_id}")]
    RunNotFound {
        /// The run identifier that was not found.
        run_id: Uuid,
    },

    /// The run is finalized; recomputation and deletion are forbidden.
    #[error("Payroll run {run_id} is finalized and cannot be modified")]
    RunFinalized {
        /// The finalized run identifier.
        run_id: Uuid,
    },

    /// A manual pay override was rejected.
    #[error("Invalid override: {message}")]
    InvalidOverride {
        /// A description of why the override was rejected.
        message: String,
    },

    /// A loan ledger update conflicted with the stored balance.
    #[error("Loan ledger conflict for loan {loan_id}: {message}")]
    LoanLedgerConflict {
        /// The loan whose update conflicted.
        loan_id: Uuid,
        /// A description of the conflict.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
