//! Persistence seam for payroll runs.
//!
//! The engine talks to storage through the [`PayrollStore`] trait: a
//! single bounded read per run (loans, prior year totals) and a single
//! atomic write (run, items, ledger, year totals). [`InMemoryStore`]
//! implements the trait behind one mutex, which both makes the commit
//! atomic and serializes loan-balance mutation across concurrent runs.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::calculation::{LoanLedgerUpdate, retract};
use crate::error::{EngineError, EngineResult};
use crate::models::{Loan, LoanPayment, PayrollItem, PayrollRun, RunStatus, YtdSummary};

/// Storage operations the orchestrator depends on.
///
/// Implementations must make [`commit_run`](PayrollStore::commit_run)
/// atomic: either every record of the run lands, or none do.
pub trait PayrollStore {
    /// Returns a run with the same (start, end) period fingerprint whose
    /// status blocks a duplicate, if one exists.
    fn find_blocking_run(&self, start: NaiveDate, end: NaiveDate) -> Option<PayrollRun>;

    /// Returns a run by id.
    fn get_run(&self, run_id: Uuid) -> Option<PayrollRun>;

    /// Returns the items persisted for a run, in processing order.
    fn items_for_run(&self, run_id: Uuid) -> Vec<PayrollItem>;

    /// Returns the employee's loans as currently stored.
    fn loans_for(&self, employee_id: &str) -> Vec<Loan>;

    /// Registers or replaces a loan in the ledger.
    fn upsert_loan(&self, loan: Loan);

    /// Returns the stored year totals for an employee, if any.
    fn ytd_for(&self, employee_id: &str, year: i32) -> Option<YtdSummary>;

    /// Atomically persists a completed run: the run row, its items, the
    /// loan payments with their ledger updates, and the refreshed year
    /// totals. Ledger updates carry the balance the computation observed;
    /// a mismatch against the stored balance fails the whole commit.
    fn commit_run(
        &self,
        run: PayrollRun,
        items: Vec<PayrollItem>,
        payments: Vec<LoanPayment>,
        loan_updates: Vec<LoanLedgerUpdate>,
        summaries: Vec<YtdSummary>,
    ) -> EngineResult<()>;

    /// Transitions a run to the terminal `Finalized` status.
    fn finalize_run(&self, run_id: Uuid) -> EngineResult<PayrollRun>;

    /// Deletes a non-finalized run and retracts its items' year-to-date
    /// contributions. Loan payments are kept; balances never move back up.
    fn delete_run(&self, run_id: Uuid) -> EngineResult<()>;
}

#[derive(Debug, Default)]
struct StoreState {
    runs: HashMap<Uuid, PayrollRun>,
    items: HashMap<Uuid, Vec<PayrollItem>>,
    loans: HashMap<Uuid, Loan>,
    payments: HashMap<Uuid, Vec<LoanPayment>>,
    summaries: HashMap<(String, i32), YtdSummary>,
}

/// An in-memory [`PayrollStore`] for tests and embedding callers.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the payments recorded against a loan, oldest first.
    pub fn payments_for_loan(&self, loan_id: Uuid) -> Vec<LoanPayment> {
        self.lock().payments.get(&loan_id).cloned().unwrap_or_default()
    }

    /// Returns a loan by id.
    pub fn get_loan(&self, loan_id: Uuid) -> Option<Loan> {
        self.lock().loans.get(&loan_id).cloned()
    }
}

impl PayrollStore for InMemoryStore {
    fn find_blocking_run(&self, start: NaiveDate, end: NaiveDate) -> Option<PayrollRun> {
        self.lock()
            .runs
            .values()
            .find(|run| {
                run.period_start == start
                    && run.period_end == end
                    && run.status.blocks_duplicate()
            })
            .cloned()
    }

    fn get_run(&self, run_id: Uuid) -> Option<PayrollRun> {
        self.lock().runs.get(&run_id).cloned()
    }

    fn items_for_run(&self, run_id: Uuid) -> Vec<PayrollItem> {
        self.lock().items.get(&run_id).cloned().unwrap_or_default()
    }

    fn loans_for(&self, employee_id: &str) -> Vec<Loan> {
        let mut loans: Vec<Loan> = self
            .lock()
            .loans
            .values()
            .filter(|loan| loan.employee_id == employee_id)
            .cloned()
            .collect();
        // Deterministic deduction order across runs.
        loans.sort_by_key(|loan| loan.id);
        loans
    }

    fn upsert_loan(&self, loan: Loan) {
        self.lock().loans.insert(loan.id, loan);
    }

    fn ytd_for(&self, employee_id: &str, year: i32) -> Option<YtdSummary> {
        self.lock()
            .summaries
            .get(&(employee_id.to_string(), year))
            .cloned()
    }

    fn commit_run(
        &self,
        run: PayrollRun,
        items: Vec<PayrollItem>,
        payments: Vec<LoanPayment>,
        loan_updates: Vec<LoanLedgerUpdate>,
        summaries: Vec<YtdSummary>,
    ) -> EngineResult<()> {
        let mut state = self.lock();

        // Validate every ledger update before touching anything, so a
        // conflict leaves the store unchanged.
        for update in &loan_updates {
            let loan = state.loans.get(&update.loan_id).ok_or_else(|| {
                EngineError::LoanLedgerConflict {
                    loan_id: update.loan_id,
                    message: "loan is not registered".to_string(),
                }
            })?;
            if loan.remaining_balance != update.balance_before {
                return Err(EngineError::LoanLedgerConflict {
                    loan_id: update.loan_id,
                    message: format!(
                        "stored balance {} does not match observed balance {}",
                        loan.remaining_balance, update.balance_before
                    ),
                });
            }
        }

        for update in &loan_updates {
            if let Some(loan) = state.loans.get_mut(&update.loan_id) {
                loan.remaining_balance = update.balance_after;
                if let Some(status) = update.new_status {
                    loan.status = status;
                }
            }
        }

        for payment in payments {
            state.payments.entry(payment.loan_id).or_default().push(payment);
        }

        for summary in summaries {
            state
                .summaries
                .insert((summary.employee_id.clone(), summary.year), summary);
        }

        state.items.insert(run.id, items);
        state.runs.insert(run.id, run);

        Ok(())
    }

    fn finalize_run(&self, run_id: Uuid) -> EngineResult<PayrollRun> {
        let mut state = self.lock();
        let run = state
            .runs
            .get_mut(&run_id)
            .ok_or(EngineError::RunNotFound { run_id })?;
        run.status = RunStatus::Finalized;
        Ok(run.clone())
    }

    fn delete_run(&self, run_id: Uuid) -> EngineResult<()> {
        let mut state = self.lock();
        let run = state
            .runs
            .get(&run_id)
            .ok_or(EngineError::RunNotFound { run_id })?;
        if run.status.is_terminal() {
            return Err(EngineError::RunFinalized { run_id });
        }

        let year = run.pay_date.year();
        let items = state.items.remove(&run_id).unwrap_or_default();
        for item in &items {
            if let Some(summary) = state
                .summaries
                .get_mut(&(item.employee_id.clone(), year))
            {
                retract(summary, item);
            }
        }
        state.runs.remove(&run_id);

        Ok(())
    }
}
