use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use tempfile::TempDir;

use hearth_core::cashflow::{CashflowMonthUpsert, CashflowRepositoryTrait};
use hearth_core::investments::{
    InvestmentCategory, InvestmentRepositoryTrait, MovementKind, NewInvestment, NewMovement,
};
use hearth_storage_sqlite::cashflow::CashflowRepository;
use hearth_storage_sqlite::investments::InvestmentRepository;
use hearth_storage_sqlite::{init, spawn_writer, DbPool, WriteHandle};

fn open_db(dir: &TempDir) -> (DbPool, WriteHandle) {
    let path = dir.path().join("hearth.db");
    let pool = init(path.to_str().unwrap()).unwrap();
    let writer = spawn_writer(pool.clone());
    (pool, writer)
}

fn new_investment(tenant_id: &str, name: &str) -> NewInvestment {
    NewInvestment {
        id: None,
        tenant_id: tenant_id.to_string(),
        name: name.to_string(),
        manager: None,
        category: InvestmentCategory::Fund,
        capital_invested: dec!(1000000),
        opened_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        current_value: None,
        value_as_of: None,
        return_pct: None,
        monthly_income: None,
        units: None,
    }
}

#[tokio::test]
async fn investment_round_trip_with_movements() {
    let dir = TempDir::new().unwrap();
    let (pool, writer) = open_db(&dir);
    let repo = InvestmentRepository::new(pool, writer);

    let created = repo.create(new_investment("fam", "Fondo Alpha")).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.capital_invested, dec!(1000000));

    repo.add_movement(NewMovement {
        investment_id: created.id.clone(),
        kind: MovementKind::Contribution,
        amount: dec!(200000),
        effective_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
    })
    .await
    .unwrap();
    repo.add_movement(NewMovement {
        investment_id: created.id.clone(),
        kind: MovementKind::Withdrawal,
        amount: dec!(50000),
        effective_at: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
    })
    .await
    .unwrap();

    let loaded = repo.get_with_movements(&created.id).unwrap();
    assert_eq!(loaded.movements.len(), 2);
    // Movements come back ascending by effective date.
    assert_eq!(loaded.movements[0].kind, MovementKind::Withdrawal);
    assert_eq!(loaded.movements[1].amount, dec!(200000));

    let found = repo.find_by_name("fam", "Fondo Alpha").unwrap();
    assert!(found.is_some());
    assert!(repo.find_by_name("otros", "Fondo Alpha").unwrap().is_none());
}

#[tokio::test]
async fn set_current_value_records_adjustment_atomically() {
    let dir = TempDir::new().unwrap();
    let (pool, writer) = open_db(&dir);
    let repo = InvestmentRepository::new(pool, writer);

    let created = repo.create(new_investment("fam", "Fondo Beta")).await.unwrap();
    let as_of = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();

    let updated = repo
        .set_current_value(
            &created.id,
            dec!(950000),
            as_of,
            NewMovement {
                investment_id: created.id.clone(),
                kind: MovementKind::ValuationAdjustment,
                amount: dec!(-50000),
                effective_at: as_of,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.current_value, Some(dec!(950000)));
    assert_eq!(updated.value_as_of, Some(as_of));

    let loaded = repo.get_with_movements(&created.id).unwrap();
    assert_eq!(loaded.movements.len(), 1);
    assert_eq!(loaded.movements[0].kind, MovementKind::ValuationAdjustment);
    assert_eq!(loaded.movements[0].amount, dec!(-50000));
}

#[tokio::test]
async fn delete_investment_removes_movement_log() {
    let dir = TempDir::new().unwrap();
    let (pool, writer) = open_db(&dir);
    let repo = InvestmentRepository::new(pool, writer);

    let created = repo.create(new_investment("fam", "Fondo Gamma")).await.unwrap();
    repo.add_movement(NewMovement {
        investment_id: created.id.clone(),
        kind: MovementKind::Contribution,
        amount: dec!(10000),
        effective_at: Utc::now(),
    })
    .await
    .unwrap();

    let deleted = repo.delete(&created.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(repo.list_with_movements("fam").unwrap().is_empty());
}

#[tokio::test]
async fn cashflow_upsert_is_keyed_by_tenant_and_month() {
    let dir = TempDir::new().unwrap();
    let (pool, writer) = open_db(&dir);
    let repo = CashflowRepository::new(pool, writer);

    repo.upsert(CashflowMonthUpsert {
        tenant_id: "fam".to_string(),
        month: "2026-01".to_string(),
        income: dec!(1200000),
        expenses: dec!(600000),
    })
    .await
    .unwrap();
    repo.upsert(CashflowMonthUpsert {
        tenant_id: "fam".to_string(),
        month: "2026-01".to_string(),
        income: dec!(1250000),
        expenses: dec!(610000),
    })
    .await
    .unwrap();
    repo.upsert(CashflowMonthUpsert {
        tenant_id: "fam".to_string(),
        month: "2025-12".to_string(),
        income: dec!(1100000),
        expenses: dec!(590000),
    })
    .await
    .unwrap();

    let months = repo.list("fam").unwrap();
    assert_eq!(months.len(), 2);
    // Ascending by month key, replays overwrite in place.
    assert_eq!(months[0].month, "2025-12");
    assert_eq!(months[1].income, dec!(1250000));
    assert!(repo.list("otros").unwrap().is_empty());
}
