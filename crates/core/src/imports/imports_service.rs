//! CSV import service.
//!
//! Each section of the payload is a comma-separated blob with a header
//! row. Rows are matched to existing records by their tenant-scoped
//! natural key and updated in place, otherwise inserted. A row missing
//! its key, or one the reader cannot decode, is skipped without
//! aborting the rest of the batch.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::imports_model::{ImportPayload, ImportSummary, SectionSummary};
use super::imports_traits::ImportServiceTrait;
use crate::cashflow::{CashflowMonthUpsert, CashflowRepositoryTrait};
use crate::errors::Result;
use crate::investments::{
    InvestmentCategory, InvestmentRepositoryTrait, InvestmentUpdate, NewInvestment,
};
use crate::liabilities::{LiabilityCategory, LiabilityRepositoryTrait, LiabilityUpdate, NewLiability};
use crate::rentals::{NewRental, RentalRepositoryTrait, RentalStatus, RentalUpdate};
use crate::utils::{is_valid_month_key, normalize_fraction, parse_decimal_lenient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvestmentRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    manager: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    capital_invested: String,
    #[serde(default)]
    opened_at: String,
    #[serde(default)]
    current_value: String,
    #[serde(default)]
    return_pct: String,
    #[serde(default)]
    monthly_income: String,
    #[serde(default)]
    units: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LiabilityRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    balance: String,
    #[serde(default)]
    monthly_payment: String,
    #[serde(default)]
    interest_rate: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CashflowRow {
    #[serde(default)]
    month: String,
    #[serde(default)]
    income: String,
    #[serde(default)]
    expenses: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RentalRow {
    #[serde(default)]
    property_name: String,
    #[serde(default)]
    monthly_rent: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    tenant_name: String,
}

/// Decodes a CSV blob into typed rows. Undecodable records come back as
/// errors so callers can count them as skipped.
fn read_rows<T: DeserializeOwned>(csv_text: &str) -> Vec<std::result::Result<T, csv::Error>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    reader.deserialize().collect()
}

fn required_amount(value: &str) -> Decimal {
    parse_decimal_lenient(value).unwrap_or(Decimal::ZERO)
}

/// Optional amounts treat zero as absent, matching manual entry where a
/// blank and a zero mean the same thing.
fn optional_amount(value: &str) -> Option<Decimal> {
    parse_decimal_lenient(value).filter(|v| !v.is_zero())
}

fn optional_rate(value: &str) -> Option<Decimal> {
    optional_amount(value).map(normalize_fraction)
}

fn optional_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Service that upserts CSV-imported records through the entity
/// repositories.
pub struct ImportService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    liability_repository: Arc<dyn LiabilityRepositoryTrait>,
    rental_repository: Arc<dyn RentalRepositoryTrait>,
    cashflow_repository: Arc<dyn CashflowRepositoryTrait>,
}

impl ImportService {
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        liability_repository: Arc<dyn LiabilityRepositoryTrait>,
        rental_repository: Arc<dyn RentalRepositoryTrait>,
        cashflow_repository: Arc<dyn CashflowRepositoryTrait>,
    ) -> Self {
        Self {
            investment_repository,
            liability_repository,
            rental_repository,
            cashflow_repository,
        }
    }

    async fn import_investments(&self, tenant_id: &str, csv_text: &str) -> Result<SectionSummary> {
        let mut summary = SectionSummary::default();
        for row in read_rows::<InvestmentRow>(csv_text) {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("Skipping unreadable investment row: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            let name = row.name.trim();
            if name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let category = InvestmentCategory::parse_lenient(&row.category);
            let capital_invested = required_amount(&row.capital_invested);
            let current_value = optional_amount(&row.current_value);
            let return_pct = optional_rate(&row.return_pct);
            let monthly_income = optional_amount(&row.monthly_income);
            let units = optional_amount(&row.units);
            let opened_at = optional_date(&row.opened_at);
            let manager = optional_text(&row.manager);

            match self.investment_repository.find_by_name(tenant_id, name)? {
                Some(existing) => {
                    // Blank optional columns leave the stored values alone,
                    // so a re-import never wipes a manual valuation.
                    self.investment_repository
                        .update(InvestmentUpdate {
                            id: Some(existing.id),
                            name: name.to_string(),
                            manager: manager.or(existing.manager),
                            category,
                            capital_invested,
                            opened_at: opened_at.or(existing.opened_at),
                            current_value: current_value.or(existing.current_value),
                            value_as_of: existing.value_as_of,
                            return_pct: return_pct.or(existing.return_pct),
                            monthly_income: monthly_income.or(existing.monthly_income),
                            units: units.or(existing.units),
                        })
                        .await?;
                    summary.updated += 1;
                }
                None => {
                    self.investment_repository
                        .create(NewInvestment {
                            id: None,
                            tenant_id: tenant_id.to_string(),
                            name: name.to_string(),
                            manager,
                            category,
                            capital_invested,
                            opened_at,
                            current_value,
                            value_as_of: None,
                            return_pct,
                            monthly_income,
                            units,
                        })
                        .await?;
                    summary.inserted += 1;
                }
            }
        }
        Ok(summary)
    }

    async fn import_liabilities(&self, tenant_id: &str, csv_text: &str) -> Result<SectionSummary> {
        let mut summary = SectionSummary::default();
        for row in read_rows::<LiabilityRow>(csv_text) {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("Skipping unreadable liability row: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            let name = row.name.trim();
            if name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let category = LiabilityCategory::parse_lenient(&row.category);
            let balance = optional_amount(&row.balance);
            let monthly_payment = required_amount(&row.monthly_payment);
            let interest_rate = optional_rate(&row.interest_rate);

            match self.liability_repository.find_by_name(tenant_id, name)? {
                Some(existing) => {
                    self.liability_repository
                        .update(LiabilityUpdate {
                            id: Some(existing.id),
                            name: name.to_string(),
                            category,
                            balance: balance.or(existing.balance),
                            monthly_payment,
                            interest_rate: interest_rate.or(existing.interest_rate),
                        })
                        .await?;
                    summary.updated += 1;
                }
                None => {
                    self.liability_repository
                        .create(NewLiability {
                            id: None,
                            tenant_id: tenant_id.to_string(),
                            name: name.to_string(),
                            category,
                            balance,
                            monthly_payment,
                            interest_rate,
                        })
                        .await?;
                    summary.inserted += 1;
                }
            }
        }
        Ok(summary)
    }

    async fn import_cashflow(&self, tenant_id: &str, csv_text: &str) -> Result<SectionSummary> {
        let mut summary = SectionSummary::default();
        let existing: HashSet<String> = self
            .cashflow_repository
            .list(tenant_id)?
            .into_iter()
            .map(|row| row.month)
            .collect();

        for row in read_rows::<CashflowRow>(csv_text) {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("Skipping unreadable cashflow row: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            let month = row.month.trim();
            if !is_valid_month_key(month) {
                summary.skipped += 1;
                continue;
            }

            self.cashflow_repository
                .upsert(CashflowMonthUpsert {
                    tenant_id: tenant_id.to_string(),
                    month: month.to_string(),
                    income: required_amount(&row.income),
                    expenses: required_amount(&row.expenses),
                })
                .await?;
            if existing.contains(month) {
                summary.updated += 1;
            } else {
                summary.inserted += 1;
            }
        }
        Ok(summary)
    }

    async fn import_rentals(&self, tenant_id: &str, csv_text: &str) -> Result<SectionSummary> {
        let mut summary = SectionSummary::default();
        for row in read_rows::<RentalRow>(csv_text) {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("Skipping unreadable rental row: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            let property_name = row.property_name.trim();
            if property_name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let monthly_rent = required_amount(&row.monthly_rent);
            let status = RentalStatus::parse_lenient(&row.status);
            let tenant_name = optional_text(&row.tenant_name);

            match self
                .rental_repository
                .find_by_property_name(tenant_id, property_name)?
            {
                Some(existing) => {
                    self.rental_repository
                        .update(RentalUpdate {
                            id: Some(existing.id),
                            property_name: property_name.to_string(),
                            monthly_rent,
                            status,
                            tenant_name: tenant_name.or(existing.tenant_name),
                        })
                        .await?;
                    summary.updated += 1;
                }
                None => {
                    self.rental_repository
                        .create(NewRental {
                            id: None,
                            tenant_id: tenant_id.to_string(),
                            property_name: property_name.to_string(),
                            monthly_rent,
                            status,
                            tenant_name,
                        })
                        .await?;
                    summary.inserted += 1;
                }
            }
        }
        Ok(summary)
    }
}

#[async_trait]
impl ImportServiceTrait for ImportService {
    async fn import_data(&self, payload: ImportPayload) -> Result<ImportSummary> {
        payload.validate()?;
        let tenant_id = payload.tenant_id.as_str();
        let mut summary = ImportSummary::default();

        if let Some(csv_text) = payload.investments_csv.as_deref() {
            summary.investments = self.import_investments(tenant_id, csv_text).await?;
        }
        if let Some(csv_text) = payload.liabilities_csv.as_deref() {
            summary.liabilities = self.import_liabilities(tenant_id, csv_text).await?;
        }
        if let Some(csv_text) = payload.cashflow_csv.as_deref() {
            summary.cashflow = self.import_cashflow(tenant_id, csv_text).await?;
        }
        if let Some(csv_text) = payload.rentals_csv.as_deref() {
            summary.rentals = self.import_rentals(tenant_id, csv_text).await?;
        }

        log::info!(
            "Import for tenant {} finished: {:?}",
            tenant_id,
            summary
        );
        Ok(summary)
    }
}
