use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use hearth_core::imports::{ImportPayload, ImportSummary};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn import_data(
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<ImportPayload>,
) -> ApiResult<Json<ImportSummary>> {
    payload.tenant_id = state.resolve_tenant(Some(payload.tenant_id));
    let summary = state.import_service.import_data(payload).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/import", post(import_data))
}
