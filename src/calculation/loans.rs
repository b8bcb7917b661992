//! Loan amortization for payroll deductions.
//!
//! This is the pure compute half of loan handling: it determines what each
//! active loan contributes to the period's deduction and emits ledger
//! update instructions. Applying those instructions to stored balances is
//! a separate persistence step, so this module can be tested without one.

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::models::{Loan, LoanStatus, LoanType};

/// An instruction to apply one loan's deduction to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanLedgerUpdate {
    /// The loan to update.
    pub loan_id: Uuid,
    /// The balance the computation observed before deducting. The store
    /// refuses the update if the stored balance has moved (write-write
    /// conflict with a concurrent run).
    pub balance_before: Decimal,
    /// The amount deducted this period.
    pub payment_amount: Decimal,
    /// The remaining balance after the deduction.
    pub balance_after: Decimal,
    /// Status transition, when the deduction completes the loan.
    pub new_status: Option<LoanStatus>,
}

/// The result of computing one employee's loan deductions for a period.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoanDeductionResult {
    /// Deduction total for internal loans.
    pub internal_total: Decimal,
    /// Deduction total for third-party loans.
    pub third_party_total: Decimal,
    /// Ledger update instructions, one per deducted loan.
    pub updates: Vec<LoanLedgerUpdate>,
}

impl LoanDeductionResult {
    /// Total deduction across both loan types.
    pub fn total(&self) -> Decimal {
        self.internal_total + self.third_party_total
    }
}

/// Computes the period's loan deductions for an employee's loans.
///
/// Each active loan contributes `min(installment, remaining balance)`, so
/// no run ever deducts past a loan's balance, and a loan whose balance
/// reaches zero is marked for transition to `Completed`. Loans that are
/// cancelled, already completed, or drained to zero are skipped and
/// logged; they never fail the employee or the run.
pub fn calculate_loan_deductions(loans: &[Loan]) -> LoanDeductionResult {
    let mut result = LoanDeductionResult::default();

    for loan in loans {
        if !loan.is_active() {
            warn!(
                loan_id = %loan.id,
                status = ?loan.status,
                "skipping deduction against non-active loan"
            );
            continue;
        }

        let payment = loan.installment_amount.min(loan.remaining_balance);
        if payment <= Decimal::ZERO {
            continue;
        }

        let balance_after = loan.remaining_balance - payment;
        let new_status = if balance_after == Decimal::ZERO {
            Some(LoanStatus::Completed)
        } else {
            None
        };

        match loan.loan_type {
            LoanType::Internal => result.internal_total += payment,
            LoanType::ThirdParty => result.third_party_total += payment,
        }

        result.updates.push(LoanLedgerUpdate {
            loan_id: loan.id,
            balance_before: loan.remaining_balance,
            payment_amount: payment,
            balance_after,
            new_status,
        });
    }

    result
}
