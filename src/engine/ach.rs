//! ACH batch construction for direct deposit.
//!
//! Builds the structured batch a bank-transfer collaborator consumes.
//! Items whose employee has complete banking details become entries;
//! the rest are flagged for manual handling and excluded from the total.
//! No file format is rendered here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Employee, PayrollItem, PayrollRun};

/// One direct-deposit instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchEntry {
    /// The employee being paid.
    pub employee_id: String,
    /// Receiving bank name.
    pub bank_name: String,
    /// Receiving account number.
    pub account_number: String,
    /// Receiving bank routing number.
    pub routing_number: String,
    /// The net amount to transfer.
    pub amount: Decimal,
}

/// A batch of direct-deposit instructions for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchBatch {
    /// The run the batch pays.
    pub run_id: Uuid,
    /// Transfer instructions for employees with complete banking details.
    pub entries: Vec<AchEntry>,
    /// Employees excluded for missing or incomplete banking details.
    pub flagged: Vec<String>,
    /// Sum of entry amounts; flagged items are not included.
    pub total: Decimal,
}

/// Builds the ACH batch for a run's items.
///
/// The batch total equals the sum of paid net over items with valid
/// banking information; every other item lands in `flagged` instead.
pub fn build_ach_batch(
    run: &PayrollRun,
    items: &[PayrollItem],
    employees: &[Employee],
) -> AchBatch {
    let by_id: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut entries = Vec::new();
    let mut flagged = Vec::new();
    let mut total = Decimal::ZERO;

    for item in items {
        let account = by_id
            .get(item.employee_id.as_str())
            .and_then(|employee| employee.bank_account.as_ref())
            .filter(|account| account.is_complete());

        match account {
            Some(account) => {
                let amount = item.paid_net();
                total += amount;
                entries.push(AchEntry {
                    employee_id: item.employee_id.clone(),
                    bank_name: account.bank_name.clone(),
                    account_number: account.account_number.clone(),
                    routing_number: account.routing_number.clone(),
                    amount,
                });
            }
            None => flagged.push(item.employee_id.clone()),
        }
    }

    AchBatch {
        run_id: run.id,
        entries,
        flagged,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BankAccount, Classification, EmploymentStatus, PayFrequency, RunStatus,
    };
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn employee(id: &str, bank_account: Option<BankAccount>) -> Employee {
        Employee {
            id: id.to_string(),
            classification: Classification::Hourly,
            pay_frequency: PayFrequency::BiWeekly,
            monthly_salary: None,
            hourly_rate: Some(dec("20.00")),
            standard_hours_per_week: dec("40"),
            is_exempt_ss: false,
            is_exempt_medical: false,
            date_of_birth: make_date("1990-01-15"),
            status: EmploymentStatus::Active,
            bank_account,
        }
    }

    fn account() -> BankAccount {
        BankAccount {
            bank_name: "ACB".to_string(),
            account_number: "100200300".to_string(),
            routing_number: "020015".to_string(),
        }
    }

    fn run() -> PayrollRun {
        PayrollRun {
            id: Uuid::new_v4(),
            period_start: make_date("2025-03-03"),
            period_end: make_date("2025-03-16"),
            pay_date: make_date("2025-03-21"),
            status: RunStatus::Completed,
            employee_count: 2,
            total_gross: Decimal::ZERO,
            total_net: Decimal::ZERO,
        }
    }

    fn item_for(run_id: Uuid, employee_id: &str, net: &str) -> PayrollItem {
        PayrollItem {
            id: Uuid::new_v4(),
            run_id,
            employee_id: employee_id.to_string(),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            vacation_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            lunch_excluded_hours: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            vacation_pay: Decimal::ZERO,
            leave_pay: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            ss_employee: Decimal::ZERO,
            ss_employer: Decimal::ZERO,
            mb_employee: Decimal::ZERO,
            mb_employer: Decimal::ZERO,
            education_levy: Decimal::ZERO,
            loan_internal: Decimal::ZERO,
            loan_third_party: Decimal::ZERO,
            override_gross: None,
            override_net: None,
            override_reason: None,
            override_actor: None,
            net_pay: dec(net),
            ytd_gross_pay: Decimal::ZERO,
            ytd_net_pay: Decimal::ZERO,
            loan_payment_ids: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_total_sums_only_items_with_banking_details() {
        let run = run();
        let items = vec![
            item_for(run.id, "emp_banked", "1405.54"),
            item_for(run.id, "emp_unbanked", "900.00"),
        ];
        let employees = vec![
            employee("emp_banked", Some(account())),
            employee("emp_unbanked", None),
        ];

        let batch = build_ach_batch(&run, &items, &employees);

        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.total, dec("1405.54"));
        assert_eq!(batch.flagged, vec!["emp_unbanked".to_string()]);
    }

    #[test]
    fn test_incomplete_account_is_flagged() {
        let run = run();
        let items = vec![item_for(run.id, "emp_001", "1000.00")];
        let mut incomplete = account();
        incomplete.routing_number = String::new();
        let employees = vec![employee("emp_001", Some(incomplete))];

        let batch = build_ach_batch(&run, &items, &employees);

        assert!(batch.entries.is_empty());
        assert_eq!(batch.flagged, vec!["emp_001".to_string()]);
        assert_eq!(batch.total, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_employee_is_flagged() {
        let run = run();
        let items = vec![item_for(run.id, "emp_missing", "500.00")];

        let batch = build_ach_batch(&run, &items, &[]);

        assert_eq!(batch.flagged, vec!["emp_missing".to_string()]);
    }

    #[test]
    fn test_overridden_net_is_what_transfers() {
        let run = run();
        let mut item = item_for(run.id, "emp_001", "1000.00");
        item.override_net = Some(dec("1250.00"));
        let employees = vec![employee("emp_001", Some(account()))];

        let batch = build_ach_batch(&run, &[item], &employees);

        assert_eq!(batch.entries[0].amount, dec("1250.00"));
        assert_eq!(batch.total, dec("1250.00"));
    }
}
