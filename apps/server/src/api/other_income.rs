use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use hearth_core::other_income::{NewOtherIncome, OtherIncome, OtherIncomeUpdate};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_other_incomes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<OtherIncome>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let incomes = state.other_income_service.list_other_incomes(&tenant_id)?;
    Ok(Json(incomes))
}

async fn create_other_income(
    State(state): State<Arc<AppState>>,
    Json(mut new_income): Json<NewOtherIncome>,
) -> ApiResult<Json<OtherIncome>> {
    new_income.tenant_id = state.resolve_tenant(Some(new_income.tenant_id));
    let income = state
        .other_income_service
        .create_other_income(new_income)
        .await?;
    Ok(Json(income))
}

async fn update_other_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<OtherIncomeUpdate>,
) -> ApiResult<Json<OtherIncome>> {
    update.id = Some(id);
    let income = state.other_income_service.update_other_income(update).await?;
    Ok(Json(income))
}

async fn delete_other_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.other_income_service.delete_other_income(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/other-incomes",
            get(list_other_incomes).post(create_other_income),
        )
        .route(
            "/other-incomes/{id}",
            delete(delete_other_income).put(update_other_income),
        )
}
