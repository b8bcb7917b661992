//! Employee model and related types.
//!
//! This module defines the Employee struct together with the
//! classification, pay frequency, and employment status enums used
//! throughout the payroll engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The employee classification, which selects the gross-pay strategy.
///
/// Each classification pays base gross in a different way: salaried and
/// supervisor employees draw a prorated share of a monthly salary, hourly
/// employees are paid per hour with overtime, and private duty nurses are
/// paid per shift from the nurse rate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Salaried employee paid a monthly salary.
    Salary,
    /// Hourly employee paid per worked hour, with overtime at 1.5x.
    Hourly,
    /// Private duty nurse paid per shift from the nurse rate matrix.
    PrivateDutyNurse,
    /// Supervisor: salaried, but excluded from overtime and special pay by policy.
    Supervisor,
}

impl Classification {
    /// Returns true if this classification draws a monthly salary.
    pub fn uses_monthly_salary(&self) -> bool {
        matches!(self, Classification::Salary | Classification::Supervisor)
    }

    /// Returns true if this classification can earn overtime.
    ///
    /// Salaried employees do not earn overtime, nurse shift rates already
    /// encode their differentials, and supervisors are excluded by policy.
    pub fn overtime_eligible(&self) -> bool {
        matches!(self, Classification::Hourly)
    }

    /// Returns true if this classification can receive vacation, leave,
    /// and public holiday pay.
    ///
    /// Supervisors are excluded from all three categories by policy; the
    /// exclusion is expressed here rather than as a silent zero downstream.
    pub fn special_pay_eligible(&self) -> bool {
        !matches!(self, Classification::Supervisor)
    }
}

/// How often the employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Twelve pay periods per year.
    Monthly,
    /// Twenty-six pay periods per year (every two weeks).
    BiWeekly,
    /// Twenty-four pay periods per year (twice a month).
    SemiMonthly,
}

impl PayFrequency {
    /// The number of pay periods in a calendar year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Monthly => 12,
            PayFrequency::BiWeekly => 26,
            PayFrequency::SemiMonthly => 24,
        }
    }

    /// The number of standard working weeks covered by one pay period.
    ///
    /// Used to derive the standard-hours budget for a period from the
    /// employee's weekly standard hours. A semi-monthly period mirrors a
    /// ten-working-day half month.
    pub fn weeks_per_period(&self) -> Decimal {
        match self {
            PayFrequency::Monthly => Decimal::from(4),
            PayFrequency::BiWeekly => Decimal::from(2),
            PayFrequency::SemiMonthly => Decimal::from(2),
        }
    }

    /// The factor that scales monthly-defined statutory amounts (the
    /// insurable-earnings ceiling and the education levy threshold and
    /// exemption) to this pay-period length.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::Monthly.statutory_scale(), Decimal::ONE);
    /// assert_eq!(
    ///     PayFrequency::SemiMonthly.statutory_scale(),
    ///     Decimal::new(5, 1) // 0.5
    /// );
    /// ```
    pub fn statutory_scale(&self) -> Decimal {
        Decimal::from(12) / Decimal::from(self.periods_per_year())
    }
}

/// The employment status of an employee.
///
/// Only `Active` employees participate in payroll runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed and paid.
    Active,
    /// On extended unpaid leave; excluded from runs.
    OnLeave,
    /// No longer employed; excluded from runs.
    Terminated,
}

/// Direct deposit details for an employee.
///
/// The engine never renders or masks these values; it only checks
/// completeness when building an ACH batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// The name of the receiving bank.
    pub bank_name: String,
    /// The account number at the receiving bank.
    pub account_number: String,
    /// The routing/transit number of the receiving bank.
    pub routing_number: String,
}

impl BankAccount {
    /// Returns true if every field needed for an ACH entry is present.
    pub fn is_complete(&self) -> bool {
        !self.bank_name.trim().is_empty()
            && !self.account_number.trim().is_empty()
            && !self.routing_number.trim().is_empty()
    }
}

/// Represents an employee subject to payroll computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable, externally assigned identifier.
    pub id: String,
    /// The classification that selects the gross-pay strategy.
    pub classification: Classification,
    /// How often this employee is paid.
    pub pay_frequency: PayFrequency,
    /// Monthly salary; meaningful only for salaried classifications.
    pub monthly_salary: Option<Decimal>,
    /// Hourly rate; meaningful only for the hourly classification.
    pub hourly_rate: Option<Decimal>,
    /// Standard working hours per week; must be positive.
    pub standard_hours_per_week: Decimal,
    /// Exempt from Social Security contributions.
    #[serde(default)]
    pub is_exempt_ss: bool,
    /// Exempt from Medical Benefits contributions.
    #[serde(default)]
    pub is_exempt_medical: bool,
    /// The employee's date of birth, used for age-based deduction rules.
    pub date_of_birth: NaiveDate,
    /// The current employment status.
    pub status: EmploymentStatus,
    /// Direct deposit details, if on file.
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
}

impl Employee {
    /// Returns the employee's age in whole years on the given date.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.date_of_birth).unwrap_or(0)
    }

    /// Returns the monthly salary, or an error if the classification
    /// requires one and it is missing.
    pub fn monthly_salary(&self) -> EngineResult<Decimal> {
        self.monthly_salary
            .ok_or_else(|| EngineError::InvalidEmployee {
                employee_id: self.id.clone(),
                field: "monthly_salary".to_string(),
                message: "required for salaried classification".to_string(),
            })
    }

    /// Returns the hourly rate, or an error if the classification
    /// requires one and it is missing.
    pub fn hourly_rate(&self) -> EngineResult<Decimal> {
        self.hourly_rate.ok_or_else(|| EngineError::InvalidEmployee {
            employee_id: self.id.clone(),
            field: "hourly_rate".to_string(),
            message: "required for hourly classification".to_string(),
        })
    }

    /// Validates the structural invariants of the record: positive
    /// standard hours and exactly one meaningful compensation field for
    /// the classification.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_hours_per_week <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                employee_id: self.id.clone(),
                field: "standard_hours_per_week".to_string(),
                message: "must be positive".to_string(),
            });
        }

        match self.classification {
            Classification::Salary | Classification::Supervisor => {
                self.monthly_salary()?;
                if self.hourly_rate.is_some() {
                    return Err(EngineError::InvalidEmployee {
                        employee_id: self.id.clone(),
                        field: "hourly_rate".to_string(),
                        message: "not allowed for salaried classification".to_string(),
                    });
                }
            }
            Classification::Hourly => {
                self.hourly_rate()?;
                if self.monthly_salary.is_some() {
                    return Err(EngineError::InvalidEmployee {
                        employee_id: self.id.clone(),
                        field: "monthly_salary".to_string(),
                        message: "not allowed for hourly classification".to_string(),
                    });
                }
            }
            // Nurses are paid from the rate table's shift matrix; neither
            // compensation field applies.
            Classification::PrivateDutyNurse => {
                if self.monthly_salary.is_some() || self.hourly_rate.is_some() {
                    return Err(EngineError::InvalidEmployee {
                        employee_id: self.id.clone(),
                        field: "compensation".to_string(),
                        message: "private duty nurses are paid from shift rates".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_employee(classification: Classification) -> Employee {
        let (monthly_salary, hourly_rate) = match classification {
            Classification::Salary | Classification::Supervisor => (Some(dec("5200.00")), None),
            Classification::Hourly => (None, Some(dec("18.50"))),
            Classification::PrivateDutyNurse => (None, None),
        };
        Employee {
            id: "emp_001".to_string(),
            classification,
            pay_frequency: PayFrequency::Monthly,
            monthly_salary,
            hourly_rate,
            standard_hours_per_week: dec("40"),
            is_exempt_ss: false,
            is_exempt_medical: false,
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            status: EmploymentStatus::Active,
            bank_account: None,
        }
    }

    #[test]
    fn test_deserialize_salaried_employee() {
        let json = r#"{
            "id": "emp_001",
            "classification": "salary",
            "pay_frequency": "monthly",
            "monthly_salary": "5200.00",
            "hourly_rate": null,
            "standard_hours_per_week": "40",
            "date_of_birth": "1985-03-15",
            "status": "active"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.classification, Classification::Salary);
        assert_eq!(employee.pay_frequency, PayFrequency::Monthly);
        assert_eq!(employee.monthly_salary, Some(dec("5200.00")));
        assert!(!employee.is_exempt_ss);
        assert!(employee.bank_account.is_none());
    }

    #[test]
    fn test_deserialize_hourly_employee_with_bank_account() {
        let json = r#"{
            "id": "emp_002",
            "classification": "hourly",
            "pay_frequency": "bi_weekly",
            "monthly_salary": null,
            "hourly_rate": "18.50",
            "standard_hours_per_week": "40",
            "is_exempt_ss": true,
            "date_of_birth": "1990-07-01",
            "status": "active",
            "bank_account": {
                "bank_name": "ACB",
                "account_number": "100200300",
                "routing_number": "020015"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.classification, Classification::Hourly);
        assert!(employee.is_exempt_ss);
        assert!(employee.bank_account.unwrap().is_complete());
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = test_employee(Classification::PrivateDutyNurse);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_classification_serialization() {
        assert_eq!(
            serde_json::to_string(&Classification::PrivateDutyNurse).unwrap(),
            "\"private_duty_nurse\""
        );
        assert_eq!(
            serde_json::to_string(&Classification::Supervisor).unwrap(),
            "\"supervisor\""
        );
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(PayFrequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(PayFrequency::SemiMonthly.periods_per_year(), 24);
    }

    #[test]
    fn test_statutory_scale_semi_monthly_is_half() {
        assert_eq!(PayFrequency::SemiMonthly.statutory_scale(), dec("0.5"));
    }

    #[test]
    fn test_statutory_scale_bi_weekly() {
        let scale = PayFrequency::BiWeekly.statutory_scale();
        assert!(scale > dec("0.46") && scale < dec("0.462"));
    }

    #[test]
    fn test_supervisor_policy_exclusions() {
        assert!(!Classification::Supervisor.overtime_eligible());
        assert!(!Classification::Supervisor.special_pay_eligible());
        assert!(Classification::Supervisor.uses_monthly_salary());
    }

    #[test]
    fn test_hourly_is_overtime_eligible() {
        assert!(Classification::Hourly.overtime_eligible());
        assert!(Classification::Hourly.special_pay_eligible());
    }

    #[test]
    fn test_nurse_not_overtime_eligible() {
        assert!(!Classification::PrivateDutyNurse.overtime_eligible());
        assert!(Classification::PrivateDutyNurse.special_pay_eligible());
    }

    #[test]
    fn test_age_on_before_and_after_birthday() {
        let employee = test_employee(Classification::Salary); // born 1985-03-15
        let before = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(employee.age_on(before), 39);
        assert_eq!(employee.age_on(after), 40);
    }

    #[test]
    fn test_validate_rejects_zero_standard_hours() {
        let mut employee = test_employee(Classification::Salary);
        employee.standard_hours_per_week = Decimal::ZERO;
        assert!(matches!(
            employee.validate(),
            Err(EngineError::InvalidEmployee { field, .. }) if field == "standard_hours_per_week"
        ));
    }

    #[test]
    fn test_validate_rejects_salaried_without_salary() {
        let mut employee = test_employee(Classification::Salary);
        employee.monthly_salary = None;
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_hourly_with_salary() {
        let mut employee = test_employee(Classification::Hourly);
        employee.monthly_salary = Some(dec("1000"));
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nurse_with_hourly_rate() {
        let mut employee = test_employee(Classification::PrivateDutyNurse);
        employee.hourly_rate = Some(dec("20"));
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_records() {
        for classification in [
            Classification::Salary,
            Classification::Hourly,
            Classification::PrivateDutyNurse,
            Classification::Supervisor,
        ] {
            assert!(test_employee(classification).validate().is_ok());
        }
    }

    #[test]
    fn test_bank_account_completeness() {
        let complete = BankAccount {
            bank_name: "ACB".to_string(),
            account_number: "100200300".to_string(),
            routing_number: "020015".to_string(),
        };
        assert!(complete.is_complete());

        let missing_account = BankAccount {
            account_number: "  ".to_string(),
            ..complete.clone()
        };
        assert!(!missing_account.is_complete());
    }
}
