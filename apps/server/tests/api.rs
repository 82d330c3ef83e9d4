use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use hearth_server::api::app_router;
use hearth_server::config::Config;
use hearth_server::build_state;

const API_KEY: &str = "family-dashboard-key";

fn test_config(dir: &TempDir, api_key: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        api_key: api_key.map(|k| k.to_string()),
        default_tenant: "main".to_string(),
    }
}

async fn build_test_router(dir: &TempDir, api_key: Option<&str>) -> axum::Router {
    let config = test_config(dir, api_key);
    let state = build_state(&config).await.unwrap();
    app_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_authed(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-hearth-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

fn post_authed(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("x-hearth-key", API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn requests_without_key_are_denied() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let response = app
        .clone()
        .oneshot(get("/api/v1/investments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let wrong_key = Request::builder()
        .uri("/api/v1/investments")
        .header("x-hearth-key", "not-the-key")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(wrong_key).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconfigured_key_denies_everything() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, None).await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/v1/investments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Liveness stays open even without a key.
    let response = app.oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn matching_key_is_accepted() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let response = app.oneshot(get_authed("/api/v1/investments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_database_status() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let response = app.oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn investment_crud_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let create = post_authed(
        "/api/v1/investments",
        serde_json::json!({
            "name": "Fondo Global",
            "category": "FUND",
            "capitalInvested": "1500000",
            "openedAt": "2025-01-01T00:00:00Z"
        }),
    );
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    // Tenant falls back to the configured default.
    assert_eq!(created["tenantId"], "main");

    let movement = post_authed(
        &format!("/api/v1/investments/{id}/movements"),
        serde_json::json!({
            "kind": "CONTRIBUTION",
            "amount": "100000",
            "effectiveAt": "2025-03-01T00:00:00Z"
        }),
    );
    let response = app.clone().oneshot(movement).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_authed(&format!("/api/v1/investments/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let loaded = json_body(response).await;
    assert_eq!(loaded["movements"].as_array().unwrap().len(), 1);

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/v1/investments/{id}"))
        .header("x-hearth-key", API_KEY)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_authed(&format!("/api/v1/investments/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn import_then_overview_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let investments_csv = "\
name,manager,category,capitalInvested,currentValue,openedAt
Fondo Alpha,Acme,FUND,\"1000000,50\",1100000,2025-01-01
Piso Centro,,REAL_ESTATE,2000000,,2024-06-01
";
    let liabilities_csv = "\
name,category,balance,monthlyPayment,interestRate
Hipoteca,MORTGAGE,1800000,9500,\"2,9\"
";
    let cashflow_csv = "\
month,income,expenses
2026-01,120000,80000
";

    let import = post_authed(
        "/api/v1/import",
        serde_json::json!({
            "investmentsCsv": investments_csv,
            "liabilitiesCsv": liabilities_csv,
            "cashflowCsv": cashflow_csv
        }),
    );
    let response = app.clone().oneshot(import).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let summary = json_body(response).await;
    assert_eq!(summary["investments"]["inserted"], 2);
    assert_eq!(summary["liabilities"]["inserted"], 1);
    assert_eq!(summary["cashflow"]["inserted"], 1);

    let response = app
        .clone()
        .oneshot(get_authed("/api/v1/overview"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let overview = json_body(response).await;

    // 1100000 manual value + 2000000 capital with no valuation.
    assert_eq!(overview["kpis"]["totalInvestments"], 3100000.0);
    assert_eq!(overview["kpis"]["totalLiabilities"], 1800000.0);
    assert_eq!(
        overview["charts"]["cashflowTrend"]["source"],
        "AUTHORITATIVE"
    );
    assert_eq!(
        overview["charts"]["investmentAllocation"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn explicit_tenant_is_isolated_from_default() {
    let dir = TempDir::new().unwrap();
    let app = build_test_router(&dir, Some(API_KEY)).await;

    let create = post_authed(
        "/api/v1/rentals",
        serde_json::json!({
            "tenantId": "otros",
            "propertyName": "Atico Norte",
            "monthlyRent": "1200",
            "status": "RENTED"
        }),
    );
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_authed("/api/v1/rentals?tenantId=otros"))
        .await
        .unwrap();
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app.oneshot(get_authed("/api/v1/rentals")).await.unwrap();
    let listed = json_body(response).await;
    assert!(listed.as_array().unwrap().is_empty());
}
