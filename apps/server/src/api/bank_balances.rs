use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use hearth_core::bank_balances::{BankBalance, BankBalanceUpsert};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_balances(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<BankBalance>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let balances = state.bank_balance_service.list_balances(&tenant_id)?;
    Ok(Json(balances))
}

async fn upsert_balance(
    State(state): State<Arc<AppState>>,
    Json(mut row): Json<BankBalanceUpsert>,
) -> ApiResult<Json<BankBalance>> {
    row.tenant_id = state.resolve_tenant(Some(row.tenant_id));
    let balance = state.bank_balance_service.upsert_balance(row).await?;
    Ok(Json(balance))
}

async fn delete_balance(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.bank_balance_service.delete_balance(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bank-balances", get(list_balances).post(upsert_balance))
        .route("/bank-balances/{id}", delete(delete_balance))
}
