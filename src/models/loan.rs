//! Employee loan models.
//!
//! A [`Loan`] owns its [`LoanPayment`] ledger entries. The remaining
//! balance is only ever mutated through ledger-update instructions from
//! the loan amortizer and decreases monotonically to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether repayments stay in-house or are forwarded to a third party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// Company-issued loan; deductions stay internal.
    Internal,
    /// Garnishment or external credit; deductions are remitted to a payee.
    ThirdParty,
}

/// The lifecycle state of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Repayments are being deducted.
    Active,
    /// Fully repaid; balance is zero.
    Completed,
    /// Administratively cancelled; no further deductions.
    Cancelled,
}

/// An employee loan amortized through payroll deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for the loan.
    pub id: Uuid,
    /// The borrowing employee.
    pub employee_id: String,
    /// The amount originally advanced.
    pub original_amount: Decimal,
    /// The balance still outstanding; never negative.
    pub remaining_balance: Decimal,
    /// The fixed amount deducted each pay period.
    pub installment_amount: Decimal,
    /// Whether repayments are internal or remitted to a third party.
    pub loan_type: LoanType,
    /// The lifecycle state of the loan.
    pub status: LoanStatus,
    /// The external payee for third-party loans.
    #[serde(default)]
    pub payee: Option<String>,
}

impl Loan {
    /// Returns true if the loan should be deducted against this period.
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active && self.remaining_balance > Decimal::ZERO
    }
}

/// A single repayment recorded against a loan by a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    /// Unique identifier for the ledger entry.
    pub id: Uuid,
    /// The loan the payment applies to.
    pub loan_id: Uuid,
    /// The payroll run that produced the payment.
    pub run_id: Uuid,
    /// The amount deducted.
    pub amount: Decimal,
    /// The loan balance after this payment was applied.
    pub balance_after: Decimal,
}
