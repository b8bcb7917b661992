//! Manual pay overrides.
//!
//! An administrator may substitute a computed net (and optionally gross)
//! amount with an authorized value. The computed values stay on the item
//! for audit, and the override is applied after statutory computation but
//! before year-to-date aggregation, so the year totals reflect what was
//! actually paid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollItem;

/// An administrator-authorized replacement for a computed pay amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayOverride {
    /// The net amount to pay instead of the computed net.
    pub net_amount: Decimal,
    /// Optional replacement for the computed gross.
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    /// Why the override was authorized. Required.
    pub reason: String,
    /// Who authorized the override. Required.
    pub actor: String,
}

/// Applies an override to a payroll item.
///
/// # Errors
///
/// Returns `InvalidOverride` when the reason or actor is blank, or when a
/// replacement amount is negative. The item is untouched on error.
pub fn apply_override(item: &mut PayrollItem, pay_override: &PayOverride) -> EngineResult<()> {
    if pay_override.reason.trim().is_empty() {
        return Err(EngineError::InvalidOverride {
            message: "a reason is required".to_string(),
        });
    }
    if pay_override.actor.trim().is_empty() {
        return Err(EngineError::InvalidOverride {
            message: "an authorizing actor is required".to_string(),
        });
    }
    if pay_override.net_amount < Decimal::ZERO {
        return Err(EngineError::InvalidOverride {
            message: "net amount cannot be negative".to_string(),
        });
    }
    if let Some(gross) = pay_override.gross_amount {
        if gross < Decimal::ZERO {
            return Err(EngineError::InvalidOverride {
                message: "gross amount cannot be negative".to_string(),
            });
        }
    }

    item.override_net = Some(pay_override.net_amount);
    item.override_gross = pay_override.gross_amount;
    item.override_reason = Some(pay_override.reason.clone());
    item.override_actor = Some(pay_override.actor.clone());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn computed_item() -> PayrollItem {
        PayrollItem {
            id: Uuid::new_v4(),
            run_id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            regular_hours: dec("80"),
            overtime_hours: Decimal::ZERO,
            vacation_hours: Decimal::ZERO,
            leave_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            lunch_excluded_hours: Decimal::ZERO,
            base_pay: dec("1600.00"),
            overtime_pay: Decimal::ZERO,
            vacation_pay: Decimal::ZERO,
            leave_pay: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            gross_pay: dec("1600.00"),
            ss_employee: dec("112.00"),
            ss_employer: dec("144.00"),
            mb_employee: dec("56.00"),
            mb_employer: dec("56.00"),
            education_levy: dec("26.46"),
            loan_internal: Decimal::ZERO,
            loan_third_party: Decimal::ZERO,
            override_gross: None,
            override_net: None,
            override_reason: None,
            override_actor: None,
            net_pay: dec("1405.54"),
            ytd_gross_pay: Decimal::ZERO,
            ytd_net_pay: Decimal::ZERO,
            loan_payment_ids: vec![],
            warnings: vec![],
        }
    }

    fn valid_override() -> PayOverride {
        PayOverride {
            net_amount: dec("1500.00"),
            gross_amount: None,
            reason: "retro adjustment for March".to_string(),
            actor: "admin@example.test".to_string(),
        }
    }

    #[test]
    fn test_override_replaces_paid_net_and_keeps_computed() {
        let mut item = computed_item();
        apply_override(&mut item, &valid_override()).unwrap();

        assert_eq!(item.paid_net(), dec("1500.00"));
        // Computed values are retained for audit.
        assert_eq!(item.net_pay, dec("1405.54"));
        assert_eq!(item.override_reason.as_deref(), Some("retro adjustment for March"));
        assert_eq!(item.override_actor.as_deref(), Some("admin@example.test"));
    }

    #[test]
    fn test_override_can_replace_gross() {
        let mut item = computed_item();
        let mut pay_override = valid_override();
        pay_override.gross_amount = Some(dec("1700.00"));

        apply_override(&mut item, &pay_override).unwrap();

        assert_eq!(item.paid_gross(), dec("1700.00"));
        assert_eq!(item.gross_pay, dec("1600.00"));
    }

    #[test]
    fn test_blank_reason_is_rejected() {
        let mut item = computed_item();
        let mut pay_override = valid_override();
        pay_override.reason = "   ".to_string();

        let result = apply_override(&mut item, &pay_override);
        assert!(matches!(result, Err(EngineError::InvalidOverride { .. })));
        assert!(!item.has_override());
    }

    #[test]
    fn test_blank_actor_is_rejected() {
        let mut item = computed_item();
        let mut pay_override = valid_override();
        pay_override.actor = String::new();

        assert!(apply_override(&mut item, &pay_override).is_err());
        assert!(!item.has_override());
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let mut item = computed_item();
        let mut pay_override = valid_override();
        pay_override.net_amount = dec("-1.00");
        assert!(apply_override(&mut item, &pay_override).is_err());

        let mut pay_override = valid_override();
        pay_override.gross_amount = Some(dec("-1.00"));
        assert!(apply_override(&mut item, &pay_override).is_err());
    }
}
