use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use hearth_core::investments::{
    Investment, InvestmentUpdate, InvestmentWithMovements, Movement, MovementUpdate,
    NewInvestment, NewMovement,
};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<InvestmentWithMovements>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let investments = state
        .investment_service
        .list_investments_with_movements(&tenant_id)?;
    Ok(Json(investments))
}

async fn get_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InvestmentWithMovements>> {
    let investment = state.investment_service.get_investment(&id)?;
    Ok(Json(investment))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(mut new_investment): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    new_investment.tenant_id = state.resolve_tenant(Some(new_investment.tenant_id));
    let investment = state
        .investment_service
        .create_investment(new_investment)
        .await?;
    Ok(Json(investment))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<InvestmentUpdate>,
) -> ApiResult<Json<Investment>> {
    update.id = Some(id);
    let investment = state.investment_service.update_investment(update).await?;
    Ok(Json(investment))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.investment_service.delete_investment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_movement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut new_movement): Json<NewMovement>,
) -> ApiResult<Json<Movement>> {
    new_movement.investment_id = id;
    let movement = state.investment_service.add_movement(new_movement).await?;
    Ok(Json(movement))
}

async fn update_movement(
    Path((_id, movement_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<MovementUpdate>,
) -> ApiResult<Json<Movement>> {
    update.id = movement_id;
    let movement = state.investment_service.update_movement(update).await?;
    Ok(Json(movement))
}

async fn delete_movement(
    Path((_id, movement_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.investment_service.delete_movement(&movement_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentValueRequest {
    current_value: Decimal,
    as_of: Option<DateTime<Utc>>,
}

async fn update_current_value(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CurrentValueRequest>,
) -> ApiResult<Json<Investment>> {
    let as_of = body.as_of.unwrap_or_else(Utc::now);
    let investment = state
        .investment_service
        .update_current_value(&id, body.current_value, as_of)
        .await?;
    Ok(Json(investment))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpeningRequest {
    capital_invested: Decimal,
    opened_at: DateTime<Utc>,
}

async fn update_opening(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<OpeningRequest>,
) -> ApiResult<Json<Investment>> {
    let investment = state
        .investment_service
        .update_opening(&id, body.capital_invested, body.opened_at)
        .await?;
    Ok(Json(investment))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/investments",
            get(list_investments).post(create_investment),
        )
        .route(
            "/investments/{id}",
            get(get_investment)
                .put(update_investment)
                .delete(delete_investment),
        )
        .route("/investments/{id}/movements", post(add_movement))
        .route(
            "/investments/{id}/movements/{movementId}",
            put(update_movement).delete(delete_movement),
        )
        .route("/investments/{id}/current-value", put(update_current_value))
        .route("/investments/{id}/opening", put(update_opening))
}
