use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_api_key;
use crate::main_lib::AppState;

mod bank_balances;
mod cashflow;
mod health;
mod imports;
mod investments;
mod liabilities;
mod other_income;
mod overview;
mod rentals;

/// Assembles the full application router.
///
/// Everything under `/api/v1` except the health probe requires the
/// shared API key.
pub fn app_router(state: Arc<AppState>) -> Router {
    let guarded = Router::new()
        .merge(overview::router())
        .merge(imports::router())
        .merge(investments::router())
        .merge(liabilities::router())
        .merge(rentals::router())
        .merge(cashflow::router())
        .merge(other_income::router())
        .merge(bank_balances::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let api = Router::new().merge(health::router()).merge(guarded);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
