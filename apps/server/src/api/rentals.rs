use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use hearth_core::rentals::{NewRental, Rental, RentalUpdate};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantQuery {
    tenant_id: Option<String>,
}

async fn list_rentals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TenantQuery>,
) -> ApiResult<Json<Vec<Rental>>> {
    let tenant_id = state.resolve_tenant(query.tenant_id);
    let rentals = state.rental_service.list_rentals(&tenant_id)?;
    Ok(Json(rentals))
}

async fn create_rental(
    State(state): State<Arc<AppState>>,
    Json(mut new_rental): Json<NewRental>,
) -> ApiResult<Json<Rental>> {
    new_rental.tenant_id = state.resolve_tenant(Some(new_rental.tenant_id));
    let rental = state.rental_service.create_rental(new_rental).await?;
    Ok(Json(rental))
}

async fn update_rental(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<RentalUpdate>,
) -> ApiResult<Json<Rental>> {
    update.id = Some(id);
    let rental = state.rental_service.update_rental(update).await?;
    Ok(Json(rental))
}

async fn delete_rental(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.rental_service.delete_rental(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rentals", get(list_rentals).post(create_rental))
        .route("/rentals/{id}", delete(delete_rental).put(update_rental))
}
