//! Payroll run orchestration.
//!
//! Sequences the calculation pipeline per employee in a fixed order
//! (base pay, special pay, statutory deductions, loans, optional override,
//! year-to-date), accumulates run totals, and persists the result
//! atomically through the store. Per-employee failures go into the run's
//! error manifest without aborting the other employees.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    accumulate, calculate_education_levy, calculate_loan_deductions, calculate_medical_benefits,
    calculate_social_security, compute_base_pay, resolve_special_pay, LoanLedgerUpdate,
};
use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComputationWarning, Employee, EmploymentStatus, HourEntry, Loan, LoanPayment, PayPeriod,
    PayrollItem, PayrollRun, RunFailure, RunStatus, SpecialPayEntry, YtdSummary,
};

use super::overrides::{apply_override, PayOverride};
use super::store::PayrollStore;

/// Everything the engine needs to compute one employee in a run.
#[derive(Debug, Clone)]
pub struct EmployeeInputs {
    /// The employee record.
    pub employee: Employee,
    /// Normalized worked-hour entries for the period.
    pub hour_entries: Vec<HourEntry>,
    /// Vacation, leave, and holiday entries overlapping the period.
    pub special_entries: Vec<SpecialPayEntry>,
    /// An authorized pay override to apply, if any.
    pub override_request: Option<PayOverride>,
}

/// A request to execute one payroll run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// The pay period the run covers.
    pub period: PayPeriod,
    /// The date employees are paid; also selects the year-to-date year.
    pub pay_date: NaiveDate,
    /// Whether public holiday pay is enabled for this run.
    pub holiday_pay_enabled: bool,
    /// Per-employee inputs, processed in the given order.
    pub employees: Vec<EmployeeInputs>,
}

/// The persisted result of a payroll run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The run row, with final status and totals.
    pub run: PayrollRun,
    /// The items persisted for the run, in processing order.
    pub items: Vec<PayrollItem>,
    /// Loan payments generated by the run.
    pub payments: Vec<LoanPayment>,
    /// The error manifest: one entry per failed employee.
    pub failures: Vec<RunFailure>,
}

struct ProcessedEmployee {
    item: PayrollItem,
    payments: Vec<LoanPayment>,
    loan_updates: Vec<LoanLedgerUpdate>,
    summary: YtdSummary,
}

/// The payroll run orchestrator.
///
/// Generic over the storage seam so tests and embedding callers can run
/// against [`InMemoryStore`](super::InMemoryStore) while deployments plug
/// in their own persistence.
pub struct PayrollEngine<S: PayrollStore> {
    store: S,
}

impl<S: PayrollStore> PayrollEngine<S> {
    /// Creates an engine over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes a payroll run.
    ///
    /// Rejected before any computation when the period is malformed or a
    /// non-error run already covers the same (start, end) fingerprint.
    /// Per-employee failures are collected into the outcome's manifest;
    /// the run persists as `CompletedWithErrors` when the manifest is
    /// non-empty and `Completed` otherwise. Persistence is atomic: the
    /// run, its items, the loan ledger, and the year totals commit
    /// together or not at all.
    pub fn run_payroll(&self, request: &RunRequest, rates: &RateTable) -> EngineResult<RunOutcome> {
        let period = request.period;
        if period.end_date < period.start_date {
            return Err(EngineError::CalculationError {
                message: format!(
                    "period end {} precedes period start {}",
                    period.end_date, period.start_date
                ),
            });
        }

        if self
            .store
            .find_blocking_run(period.start_date, period.end_date)
            .is_some()
        {
            return Err(EngineError::DuplicateRun {
                start: period.start_date,
                end: period.end_date,
            });
        }

        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            period_start = %period.start_date,
            period_end = %period.end_date,
            employees = request.employees.len(),
            "starting payroll run"
        );

        let year = request.pay_date.year();
        let mut items = Vec::new();
        let mut payments = Vec::new();
        let mut loan_updates = Vec::new();
        let mut summaries = Vec::new();
        let mut failures = Vec::new();

        for inputs in &request.employees {
            let employee = &inputs.employee;
            if employee.status != EmploymentStatus::Active {
                info!(employee_id = %employee.id, status = ?employee.status, "skipping inactive employee");
                continue;
            }

            let loans = self.store.loans_for(&employee.id);
            let prior = self
                .store
                .ytd_for(&employee.id, year)
                .unwrap_or_else(|| YtdSummary::new(&employee.id, year));

            match process_employee(run_id, inputs, &period, request, rates, &loans, prior) {
                Ok(processed) => {
                    items.push(processed.item);
                    payments.extend(processed.payments);
                    loan_updates.extend(processed.loan_updates);
                    summaries.push(processed.summary);
                }
                Err(err) => {
                    warn!(employee_id = %employee.id, error = %err, "employee computation failed");
                    failures.push(RunFailure {
                        employee_id: employee.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let status = if failures.is_empty() {
            RunStatus::Completed
        } else {
            RunStatus::CompletedWithErrors
        };

        let total_gross: Decimal = items.iter().map(|item| item.paid_gross()).sum();
        let total_net: Decimal = items.iter().map(|item| item.paid_net()).sum();

        let run = PayrollRun {
            id: run_id,
            period_start: period.start_date,
            period_end: period.end_date,
            pay_date: request.pay_date,
            status,
            employee_count: items.len() as u32,
            total_gross,
            total_net,
        };

        self.store.commit_run(
            run.clone(),
            items.clone(),
            payments.clone(),
            loan_updates,
            summaries,
        )?;

        info!(
            run_id = %run_id,
            status = ?status,
            employees = run.employee_count,
            failures = failures.len(),
            total_gross = %total_gross,
            total_net = %total_net,
            "payroll run persisted"
        );

        Ok(RunOutcome {
            run,
            items,
            payments,
            failures,
        })
    }

    /// Transitions a run to the terminal `Finalized` status.
    pub fn finalize_run(&self, run_id: Uuid) -> EngineResult<PayrollRun> {
        self.store.finalize_run(run_id)
    }

    /// Deletes a non-finalized run, retracting its year-to-date
    /// contributions.
    pub fn delete_run(&self, run_id: Uuid) -> EngineResult<()> {
        self.store.delete_run(run_id)
    }
}

/// Runs the fixed per-employee pipeline: special pay, base pay, gross,
/// statutory deductions, loans, optional override, year-to-date.
fn process_employee(
    run_id: Uuid,
    inputs: &EmployeeInputs,
    period: &PayPeriod,
    request: &RunRequest,
    rates: &RateTable,
    loans: &[Loan],
    mut summary: YtdSummary,
) -> EngineResult<ProcessedEmployee> {
    let employee = &inputs.employee;
    employee.validate()?;

    let special = resolve_special_pay(
        employee,
        period,
        &inputs.special_entries,
        rates,
        request.holiday_pay_enabled,
    )?;
    let base = compute_base_pay(
        employee,
        period,
        &inputs.hour_entries,
        rates,
        special.total_hours(),
    )?;

    let gross_pay = base.base_pay + base.overtime_pay + special.total_pay();

    let ss = calculate_social_security(gross_pay, employee, rates);
    let mb = calculate_medical_benefits(gross_pay, employee, request.pay_date, rates);
    let levy = calculate_education_levy(gross_pay, employee.pay_frequency, rates);
    let loan_result = calculate_loan_deductions(loans);

    let net_pay = gross_pay
        - ss.employee_amount
        - mb.employee_amount
        - levy.levy
        - loan_result.total();
    if net_pay < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "net pay {} is negative for employee '{}'",
                net_pay, employee.id
            ),
        });
    }

    let payments: Vec<LoanPayment> = loan_result
        .updates
        .iter()
        .map(|update| LoanPayment {
            id: Uuid::new_v4(),
            loan_id: update.loan_id,
            run_id,
            amount: update.payment_amount,
            balance_after: update.balance_after,
        })
        .collect();

    let warnings: Vec<ComputationWarning> = special.warnings.clone();

    let mut item = PayrollItem {
        id: Uuid::new_v4(),
        run_id,
        employee_id: employee.id.clone(),
        regular_hours: base.regular_hours,
        overtime_hours: base.overtime_hours,
        vacation_hours: special.vacation_hours,
        leave_hours: special.leave_hours,
        holiday_hours: special.holiday_hours,
        lunch_excluded_hours: base.lunch_excluded_hours,
        base_pay: base.base_pay,
        overtime_pay: base.overtime_pay,
        vacation_pay: special.vacation_pay,
        leave_pay: special.leave_pay,
        holiday_pay: special.holiday_pay,
        gross_pay,
        ss_employee: ss.employee_amount,
        ss_employer: ss.employer_amount,
        mb_employee: mb.employee_amount,
        mb_employer: mb.employer_amount,
        education_levy: levy.levy,
        loan_internal: loan_result.internal_total,
        loan_third_party: loan_result.third_party_total,
        override_gross: None,
        override_net: None,
        override_reason: None,
        override_actor: None,
        net_pay,
        ytd_gross_pay: Decimal::ZERO,
        ytd_net_pay: Decimal::ZERO,
        loan_payment_ids: payments.iter().map(|p| p.id).collect(),
        warnings,
    };

    // Overrides land after statutory computation and before aggregation,
    // so the year totals reflect the amount actually paid.
    if let Some(pay_override) = &inputs.override_request {
        apply_override(&mut item, pay_override)?;
    }

    accumulate(&mut summary, &item);
    item.ytd_gross_pay = summary.gross_pay;
    item.ytd_net_pay = summary.net_pay;

    Ok(ProcessedEmployee {
        item,
        payments,
        loan_updates: loan_result.updates,
        summary,
    })
}
