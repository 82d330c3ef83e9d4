use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use hearth_core::cashflow::{CashflowMonth, CashflowMonthUpsert};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_months(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<CashflowMonth>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let months = state.cashflow_service.list_months(&tenant_id)?;
    Ok(Json(months))
}

async fn upsert_month(
    State(state): State<Arc<AppState>>,
    Json(mut row): Json<CashflowMonthUpsert>,
) -> ApiResult<Json<CashflowMonth>> {
    row.tenant_id = state.resolve_tenant(Some(row.tenant_id));
    let month = state.cashflow_service.upsert_month(row).await?;
    Ok(Json(month))
}

async fn delete_month(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.cashflow_service.delete_month(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cashflow-months", get(list_months).post(upsert_month))
        .route("/cashflow-months/{id}", delete(delete_month))
}
