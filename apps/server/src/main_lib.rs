use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use hearth_core::bank_balances::{BankBalanceService, BankBalanceServiceTrait};
use hearth_core::cashflow::{CashflowService, CashflowServiceTrait};
use hearth_core::imports::{ImportService, ImportServiceTrait};
use hearth_core::investments::{InvestmentService, InvestmentServiceTrait};
use hearth_core::liabilities::{LiabilityService, LiabilityServiceTrait};
use hearth_core::other_income::{OtherIncomeService, OtherIncomeServiceTrait};
use hearth_core::overview::{OverviewService, OverviewServiceTrait};
use hearth_core::rentals::{RentalService, RentalServiceTrait};
use hearth_storage_sqlite::bank_balances::BankBalanceRepository;
use hearth_storage_sqlite::cashflow::CashflowRepository;
use hearth_storage_sqlite::investments::InvestmentRepository;
use hearth_storage_sqlite::liabilities::LiabilityRepository;
use hearth_storage_sqlite::other_income::OtherIncomeRepository;
use hearth_storage_sqlite::rentals::RentalRepository;
use hearth_storage_sqlite::{db, DbPool};

use crate::config::Config;

pub struct AppState {
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub liability_service: Arc<dyn LiabilityServiceTrait>,
    pub rental_service: Arc<dyn RentalServiceTrait>,
    pub cashflow_service: Arc<dyn CashflowServiceTrait>,
    pub other_income_service: Arc<dyn OtherIncomeServiceTrait>,
    pub bank_balance_service: Arc<dyn BankBalanceServiceTrait>,
    pub overview_service: Arc<dyn OverviewServiceTrait>,
    pub import_service: Arc<dyn ImportServiceTrait>,
    pub pool: DbPool,
    pub api_key: Option<String>,
    pub default_tenant: String,
    pub db_path: String,
}

impl AppState {
    /// Resolves the tenant for a request, falling back to the configured
    /// default when the caller does not name one.
    pub fn resolve_tenant(&self, requested: Option<String>) -> String {
        requested
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_tenant.clone())
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("HEARTH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = db::spawn_writer(pool.clone());

    let investment_repo = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let liability_repo = Arc::new(LiabilityRepository::new(pool.clone(), writer.clone()));
    let rental_repo = Arc::new(RentalRepository::new(pool.clone(), writer.clone()));
    let cashflow_repo = Arc::new(CashflowRepository::new(pool.clone(), writer.clone()));
    let other_income_repo = Arc::new(OtherIncomeRepository::new(pool.clone(), writer.clone()));
    let bank_balance_repo = Arc::new(BankBalanceRepository::new(pool.clone(), writer.clone()));

    let investment_service: Arc<dyn InvestmentServiceTrait> =
        Arc::new(InvestmentService::new(investment_repo.clone()));
    let liability_service: Arc<dyn LiabilityServiceTrait> =
        Arc::new(LiabilityService::new(liability_repo.clone()));
    let rental_service: Arc<dyn RentalServiceTrait> =
        Arc::new(RentalService::new(rental_repo.clone()));
    let cashflow_service: Arc<dyn CashflowServiceTrait> =
        Arc::new(CashflowService::new(cashflow_repo.clone()));
    let other_income_service: Arc<dyn OtherIncomeServiceTrait> =
        Arc::new(OtherIncomeService::new(other_income_repo.clone()));
    let bank_balance_service: Arc<dyn BankBalanceServiceTrait> =
        Arc::new(BankBalanceService::new(bank_balance_repo));

    let overview_service: Arc<dyn OverviewServiceTrait> = Arc::new(OverviewService::new(
        investment_repo.clone(),
        liability_repo.clone(),
        rental_repo.clone(),
        cashflow_repo.clone(),
        other_income_repo,
    ));

    let import_service: Arc<dyn ImportServiceTrait> = Arc::new(ImportService::new(
        investment_repo,
        liability_repo,
        rental_repo,
        cashflow_repo,
    ));

    Ok(Arc::new(AppState {
        investment_service,
        liability_service,
        rental_service,
        cashflow_service,
        other_income_service,
        bank_balance_service,
        overview_service,
        import_service,
        pool,
        api_key: config.api_key.clone(),
        default_tenant: config.default_tenant.clone(),
        db_path: config.db_path.clone(),
    }))
}
