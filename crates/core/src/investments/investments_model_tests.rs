//! Unit tests for investment domain models.

use super::investments_model::*;
use chrono::Utc;
use rust_decimal_macros::dec;

fn base_new_investment() -> NewInvestment {
    NewInvestment {
        id: None,
        tenant_id: "fam-1".to_string(),
        name: "Balanced Fund".to_string(),
        manager: None,
        category: InvestmentCategory::Fund,
        capital_invested: dec!(1000000),
        opened_at: None,
        current_value: None,
        value_as_of: None,
        return_pct: None,
        monthly_income: None,
        units: None,
    }
}

#[test]
fn new_investment_requires_name_and_tenant() {
    let valid = base_new_investment();
    assert!(valid.validate().is_ok());

    let mut no_name = base_new_investment();
    no_name.name = "  ".to_string();
    assert!(no_name.validate().is_err());

    let mut no_tenant = base_new_investment();
    no_tenant.tenant_id = String::new();
    assert!(no_tenant.validate().is_err());
}

#[test]
fn new_investment_rejects_negative_capital() {
    let mut negative = base_new_investment();
    negative.capital_invested = dec!(-1);
    assert!(negative.validate().is_err());
}

#[test]
fn category_falls_back_to_other() {
    assert_eq!(
        InvestmentCategory::parse_lenient("fixed_income"),
        InvestmentCategory::FixedIncome
    );
    assert_eq!(
        InvestmentCategory::parse_lenient("CRYPTO"),
        InvestmentCategory::Other
    );
    assert_eq!(InvestmentCategory::parse_lenient(""), InvestmentCategory::Other);
}

#[test]
fn movement_amount_sign_rules() {
    let contribution = NewMovement {
        investment_id: "inv-1".to_string(),
        kind: MovementKind::Contribution,
        amount: dec!(0),
        effective_at: Utc::now(),
    };
    assert!(contribution.validate().is_err());

    let withdrawal = NewMovement {
        investment_id: "inv-1".to_string(),
        kind: MovementKind::Withdrawal,
        amount: dec!(-5),
        effective_at: Utc::now(),
    };
    assert!(withdrawal.validate().is_err());

    // Valuation adjustments are signed deltas
    let adjustment = NewMovement {
        investment_id: "inv-1".to_string(),
        kind: MovementKind::ValuationAdjustment,
        amount: dec!(-50000),
        effective_at: Utc::now(),
    };
    assert!(adjustment.validate().is_ok());
}

#[test]
fn movement_update_sign_rule_uses_effective_kind() {
    let update = MovementUpdate {
        id: "mov-1".to_string(),
        kind: Some(MovementKind::Withdrawal),
        amount: Some(dec!(-10)),
        effective_at: None,
    };
    // Changing a valuation adjustment into a withdrawal re-applies the
    // unsigned-amount rule.
    assert!(update.validate(MovementKind::ValuationAdjustment).is_err());

    let keep_kind = MovementUpdate {
        id: "mov-1".to_string(),
        kind: None,
        amount: Some(dec!(-10)),
        effective_at: None,
    };
    assert!(keep_kind.validate(MovementKind::ValuationAdjustment).is_ok());
}

#[test]
fn effective_value_prefers_manual_snapshot() {
    let mut inv = Investment {
        capital_invested: dec!(500),
        ..Default::default()
    };
    assert_eq!(inv.effective_value(), dec!(500));
    inv.current_value = Some(dec!(650));
    assert_eq!(inv.effective_value(), dec!(650));
}
