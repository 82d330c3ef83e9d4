use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use hearth_core::liabilities::{Liability, LiabilityUpdate, NewLiability};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_liabilities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<Liability>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let liabilities = state.liability_service.list_liabilities(&tenant_id)?;
    Ok(Json(liabilities))
}

async fn create_liability(
    State(state): State<Arc<AppState>>,
    Json(mut new_liability): Json<NewLiability>,
) -> ApiResult<Json<Liability>> {
    new_liability.tenant_id = state.resolve_tenant(Some(new_liability.tenant_id));
    let liability = state.liability_service.create_liability(new_liability).await?;
    Ok(Json(liability))
}

async fn update_liability(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<LiabilityUpdate>,
) -> ApiResult<Json<Liability>> {
    update.id = Some(id);
    let liability = state.liability_service.update_liability(update).await?;
    Ok(Json(liability))
}

async fn delete_liability(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.liability_service.delete_liability(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/liabilities", get(list_liabilities).post(create_liability))
        .route(
            "/liabilities/{id}",
            delete(delete_liability).put(update_liability),
        )
}
