use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

use super::imports_model::ImportPayload;
use super::imports_service::ImportService;
use super::imports_traits::ImportServiceTrait;
use crate::cashflow::{CashflowMonth, CashflowMonthUpsert, CashflowRepositoryTrait};
use crate::errors::Result;
use crate::investments::{
    Investment, InvestmentCategory, InvestmentRepositoryTrait, InvestmentUpdate,
    InvestmentWithMovements, Movement, MovementUpdate, NewInvestment, NewMovement,
};
use crate::liabilities::{
    Liability, LiabilityCategory, LiabilityRepositoryTrait, LiabilityUpdate, NewLiability,
};
use crate::rentals::{NewRental, Rental, RentalRepositoryTrait, RentalStatus, RentalUpdate};

#[derive(Default)]
struct MockInvestmentRepository {
    investments: Mutex<Vec<Investment>>,
}

#[async_trait]
impl InvestmentRepositoryTrait for MockInvestmentRepository {
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment> {
        let mut guard = self.investments.lock().unwrap();
        let investment = Investment {
            id: format!("inv-{}", guard.len() + 1),
            tenant_id: new_investment.tenant_id,
            name: new_investment.name,
            manager: new_investment.manager,
            category: new_investment.category,
            capital_invested: new_investment.capital_invested,
            opened_at: new_investment.opened_at,
            current_value: new_investment.current_value,
            value_as_of: new_investment.value_as_of,
            return_pct: new_investment.return_pct,
            monthly_income: new_investment.monthly_income,
            units: new_investment.units,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        guard.push(investment.clone());
        Ok(investment)
    }

    async fn update(&self, update: InvestmentUpdate) -> Result<Investment> {
        let mut guard = self.investments.lock().unwrap();
        let id = update.id.unwrap();
        let existing = guard.iter_mut().find(|i| i.id == id).unwrap();
        existing.name = update.name;
        existing.manager = update.manager;
        existing.category = update.category;
        existing.capital_invested = update.capital_invested;
        existing.opened_at = update.opened_at;
        existing.current_value = update.current_value;
        existing.return_pct = update.return_pct;
        existing.monthly_income = update.monthly_income;
        existing.units = update.units;
        Ok(existing.clone())
    }

    async fn delete(&self, _investment_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _investment_id: &str) -> Result<Investment> {
        unimplemented!()
    }

    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Investment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.tenant_id == tenant_id && i.name == name)
            .cloned())
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Investment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    fn list_with_movements(&self, _tenant_id: &str) -> Result<Vec<InvestmentWithMovements>> {
        unimplemented!()
    }

    fn get_with_movements(&self, _investment_id: &str) -> Result<InvestmentWithMovements> {
        unimplemented!()
    }

    async fn add_movement(&self, _new_movement: NewMovement) -> Result<Movement> {
        unimplemented!()
    }

    fn get_movement(&self, _movement_id: &str) -> Result<Movement> {
        unimplemented!()
    }

    async fn update_movement(&self, _update: MovementUpdate) -> Result<Movement> {
        unimplemented!()
    }

    async fn delete_movement(&self, _movement_id: &str) -> Result<usize> {
        unimplemented!()
    }

    async fn set_opening(
        &self,
        _investment_id: &str,
        _capital_invested: Decimal,
        _opened_at: DateTime<Utc>,
    ) -> Result<Investment> {
        unimplemented!()
    }

    async fn set_current_value(
        &self,
        _investment_id: &str,
        _current_value: Decimal,
        _as_of: DateTime<Utc>,
        _adjustment: NewMovement,
    ) -> Result<Investment> {
        unimplemented!()
    }
}

#[derive(Default)]
struct MockLiabilityRepository {
    liabilities: Mutex<Vec<Liability>>,
}

#[async_trait]
impl LiabilityRepositoryTrait for MockLiabilityRepository {
    async fn create(&self, new_liability: NewLiability) -> Result<Liability> {
        let mut guard = self.liabilities.lock().unwrap();
        let liability = Liability {
            id: format!("liab-{}", guard.len() + 1),
            tenant_id: new_liability.tenant_id,
            name: new_liability.name,
            category: new_liability.category,
            balance: new_liability.balance,
            monthly_payment: new_liability.monthly_payment,
            interest_rate: new_liability.interest_rate,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        guard.push(liability.clone());
        Ok(liability)
    }

    async fn update(&self, update: LiabilityUpdate) -> Result<Liability> {
        let mut guard = self.liabilities.lock().unwrap();
        let id = update.id.unwrap();
        let existing = guard.iter_mut().find(|l| l.id == id).unwrap();
        existing.name = update.name;
        existing.category = update.category;
        existing.balance = update.balance;
        existing.monthly_payment = update.monthly_payment;
        existing.interest_rate = update.interest_rate;
        Ok(existing.clone())
    }

    async fn delete(&self, _liability_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _liability_id: &str) -> Result<Liability> {
        unimplemented!()
    }

    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Liability>> {
        Ok(self
            .liabilities
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.tenant_id == tenant_id && l.name == name)
            .cloned())
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Liability>> {
        Ok(self
            .liabilities
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct MockRentalRepository {
    rentals: Mutex<Vec<Rental>>,
}

#[async_trait]
impl RentalRepositoryTrait for MockRentalRepository {
    async fn create(&self, new_rental: NewRental) -> Result<Rental> {
        let mut guard = self.rentals.lock().unwrap();
        let rental = Rental {
            id: format!("rent-{}", guard.len() + 1),
            tenant_id: new_rental.tenant_id,
            property_name: new_rental.property_name,
            monthly_rent: new_rental.monthly_rent,
            status: new_rental.status,
            tenant_name: new_rental.tenant_name,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        guard.push(rental.clone());
        Ok(rental)
    }

    async fn update(&self, update: RentalUpdate) -> Result<Rental> {
        let mut guard = self.rentals.lock().unwrap();
        let id = update.id.unwrap();
        let existing = guard.iter_mut().find(|r| r.id == id).unwrap();
        existing.property_name = update.property_name;
        existing.monthly_rent = update.monthly_rent;
        existing.status = update.status;
        existing.tenant_name = update.tenant_name;
        Ok(existing.clone())
    }

    async fn delete(&self, _rental_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _rental_id: &str) -> Result<Rental> {
        unimplemented!()
    }

    fn find_by_property_name(
        &self,
        tenant_id: &str,
        property_name: &str,
    ) -> Result<Option<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.tenant_id == tenant_id && r.property_name == property_name)
            .cloned())
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct MockCashflowRepository {
    months: Mutex<Vec<CashflowMonth>>,
}

#[async_trait]
impl CashflowRepositoryTrait for MockCashflowRepository {
    async fn upsert(&self, row: CashflowMonthUpsert) -> Result<CashflowMonth> {
        let mut guard = self.months.lock().unwrap();
        if let Some(existing) = guard
            .iter_mut()
            .find(|m| m.tenant_id == row.tenant_id && m.month == row.month)
        {
            existing.income = row.income;
            existing.expenses = row.expenses;
            return Ok(existing.clone());
        }
        let month = CashflowMonth {
            id: format!("cf-{}", guard.len() + 1),
            tenant_id: row.tenant_id,
            month: row.month,
            income: row.income,
            expenses: row.expenses,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        guard.push(month.clone());
        guard.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(month)
    }

    async fn delete(&self, _cashflow_month_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<CashflowMonth>> {
        Ok(self
            .months
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

struct Fixture {
    investments: Arc<MockInvestmentRepository>,
    liabilities: Arc<MockLiabilityRepository>,
    rentals: Arc<MockRentalRepository>,
    cashflow: Arc<MockCashflowRepository>,
    service: ImportService,
}

fn fixture() -> Fixture {
    let investments = Arc::new(MockInvestmentRepository::default());
    let liabilities = Arc::new(MockLiabilityRepository::default());
    let rentals = Arc::new(MockRentalRepository::default());
    let cashflow = Arc::new(MockCashflowRepository::default());
    let service = ImportService::new(
        investments.clone(),
        liabilities.clone(),
        rentals.clone(),
        cashflow.clone(),
    );
    Fixture {
        investments,
        liabilities,
        rentals,
        cashflow,
        service,
    }
}

fn payload(tenant_id: &str) -> ImportPayload {
    ImportPayload {
        tenant_id: tenant_id.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_investments_comma_decimals_and_rate_normalization() {
    let fx = fixture();
    let mut p = payload("fam");
    p.investments_csv = Some(
        "name,manager,category,capitalInvested,returnPct,monthlyIncome\n\
         Fondo Alpha,AGF Uno,FUND,\"1500000,50\",\"8,5\",120000\n"
            .to_string(),
    );

    let summary = fx.service.import_data(p).await.unwrap();
    assert_eq!(summary.investments.inserted, 1);

    let stored = &fx.investments.list("fam").unwrap()[0];
    assert_eq!(stored.capital_invested, dec!(1500000.50));
    // Percentage-form rate divides down to a fraction.
    assert_eq!(stored.return_pct, Some(dec!(0.085)));
    assert_eq!(stored.monthly_income, Some(dec!(120000)));
    assert_eq!(stored.category, InvestmentCategory::Fund);
}

#[tokio::test]
async fn test_existing_rows_matched_by_name_are_updated() {
    let fx = fixture();
    let mut first = payload("fam");
    first.investments_csv = Some(
        "name,category,capitalInvested\nFondo Alpha,FUND,1000000\n".to_string(),
    );
    fx.service.import_data(first).await.unwrap();

    let mut second = payload("fam");
    second.investments_csv = Some(
        "name,category,capitalInvested\nFondo Alpha,FUND,1250000\n".to_string(),
    );
    let summary = fx.service.import_data(second).await.unwrap();

    assert_eq!(summary.investments.inserted, 0);
    assert_eq!(summary.investments.updated, 1);
    let stored = fx.investments.list("fam").unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].capital_invested, dec!(1250000));
}

#[tokio::test]
async fn test_reimport_with_blank_optionals_keeps_stored_values() {
    let fx = fixture();
    let mut first = payload("fam");
    first.investments_csv = Some(
        "name,manager,category,capitalInvested,currentValue,returnPct\n\
         Fondo Alpha,AGF Uno,FUND,1000000,1100000,\"8,5\"\n"
            .to_string(),
    );
    fx.service.import_data(first).await.unwrap();

    // Same row again with every optional column blank.
    let mut second = payload("fam");
    second.investments_csv = Some(
        "name,manager,category,capitalInvested,currentValue,returnPct\n\
         Fondo Alpha,,FUND,1000000,,\n"
            .to_string(),
    );
    let summary = fx.service.import_data(second).await.unwrap();
    assert_eq!(summary.investments.updated, 1);

    let stored = fx.investments.find_by_name("fam", "Fondo Alpha").unwrap().unwrap();
    assert_eq!(stored.current_value, Some(dec!(1100000)));
    assert_eq!(stored.return_pct, Some(dec!(0.085)));
    assert_eq!(stored.manager.as_deref(), Some("AGF Uno"));
}

#[tokio::test]
async fn test_reimport_keeps_liability_and_rental_optionals() {
    let fx = fixture();
    let mut first = payload("fam");
    first.liabilities_csv = Some(
        "name,category,balance,monthlyPayment,interestRate\n\
         Hipoteca,MORTGAGE,1800000,9500,\"2,9\"\n"
            .to_string(),
    );
    first.rentals_csv = Some(
        "propertyName,monthlyRent,status,tenantName\n\
         Piso Centro,1200,RENTED,Maria\n"
            .to_string(),
    );
    fx.service.import_data(first).await.unwrap();

    let mut second = payload("fam");
    second.liabilities_csv = Some(
        "name,category,balance,monthlyPayment,interestRate\n\
         Hipoteca,MORTGAGE,,9600,\n"
            .to_string(),
    );
    second.rentals_csv = Some(
        "propertyName,monthlyRent,status,tenantName\n\
         Piso Centro,1250,RENTED,\n"
            .to_string(),
    );
    fx.service.import_data(second).await.unwrap();

    let liability = fx.liabilities.find_by_name("fam", "Hipoteca").unwrap().unwrap();
    assert_eq!(liability.monthly_payment, dec!(9600));
    assert_eq!(liability.balance, Some(dec!(1800000)));
    assert_eq!(liability.interest_rate, Some(dec!(0.029)));

    let rental = fx
        .rentals
        .find_by_property_name("fam", "Piso Centro")
        .unwrap()
        .unwrap();
    assert_eq!(rental.monthly_rent, dec!(1250));
    assert_eq!(rental.tenant_name.as_deref(), Some("Maria"));
}

#[tokio::test]
async fn test_rows_missing_natural_key_are_skipped() {
    let fx = fixture();
    let mut p = payload("fam");
    p.investments_csv = Some(
        "name,category,capitalInvested\n,FUND,1000000\nFondo Beta,FUND,500000\n".to_string(),
    );

    let summary = fx.service.import_data(p).await.unwrap();

    assert_eq!(summary.investments.inserted, 1);
    assert_eq!(summary.investments.skipped, 1);
    assert_eq!(fx.investments.list("fam").unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_categories_fall_back_to_other() {
    let fx = fixture();
    let mut p = payload("fam");
    p.liabilities_csv = Some(
        "name,category,balance,monthlyPayment,interestRate\n\
         Credito Auto,CAR_LOAN,8000000,250000,\"12,9\"\n"
            .to_string(),
    );

    fx.service.import_data(p).await.unwrap();

    let stored = &fx.liabilities.list("fam").unwrap()[0];
    assert_eq!(stored.category, LiabilityCategory::Other);
    assert_eq!(stored.interest_rate, Some(dec!(0.129)));
}

#[tokio::test]
async fn test_cashflow_upserts_and_rejects_bad_month_keys() {
    let fx = fixture();
    let mut first = payload("fam");
    first.cashflow_csv = Some("month,income,expenses\n2026-01,1200000,600000\n".to_string());
    fx.service.import_data(first).await.unwrap();

    let mut second = payload("fam");
    second.cashflow_csv = Some(
        "month,income,expenses\n2026-01,1300000,650000\nenero,100,100\n".to_string(),
    );
    let summary = fx.service.import_data(second).await.unwrap();

    assert_eq!(summary.cashflow.updated, 1);
    assert_eq!(summary.cashflow.skipped, 1);
    let months = fx.cashflow.list("fam").unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].income, dec!(1300000));
}

#[tokio::test]
async fn test_rental_status_falls_back_to_vacant() {
    let fx = fixture();
    let mut p = payload("fam");
    p.rentals_csv = Some(
        "propertyName,monthlyRent,status,tenantName\n\
         Depto Centro,450000,RENTED,Maria\nCasa Playa,0,UNKNOWN,\n"
            .to_string(),
    );

    let summary = fx.service.import_data(p).await.unwrap();
    assert_eq!(summary.rentals.inserted, 2);

    let stored = fx.rentals.list("fam").unwrap();
    assert_eq!(stored[0].status, RentalStatus::Rented);
    assert_eq!(stored[0].tenant_name.as_deref(), Some("Maria"));
    assert_eq!(stored[1].status, RentalStatus::Vacant);
    assert_eq!(stored[1].tenant_name, None);
}

#[tokio::test]
async fn test_empty_tenant_rejected() {
    let fx = fixture();
    let p = payload("  ");
    assert!(fx.service.import_data(p).await.is_err());
}
