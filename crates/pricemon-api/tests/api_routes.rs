#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pricemon_api::{
    app_state::AppState,
    config::{self, ApiConfig},
    jobs::Scheduler,
    router,
};

/// Built-in defaults with background jobs switched off through the env flag
/// before anything is initialised. No config file is read.
fn test_app() -> (AppState, Router) {
    let mut cfg = ApiConfig::default();
    config::apply_env_overrides(&mut cfg, |k| {
        (k == config::DISABLE_BACKGROUND_JOBS_ENV).then(|| "1".to_string())
    });
    let state = AppState::new(cfg).expect("state");
    (state.clone(), router::build_router(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn root_reports_running() {
    let (_, app) = test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn health_has_status() {
    let (_, app) = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("status").is_some());
    assert_eq!(body["background_jobs"], "disabled");
}

#[tokio::test]
async fn stats_keys() {
    let (_, app) = test_app();
    let (status, body) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("total_price_records").is_some());
    assert!(body.get("supported_commodities").is_some());
    assert_eq!(body["total_price_records"], 0);
}

#[tokio::test]
async fn metrics_endpoints() {
    let (_, app) = test_app();

    let (status, all) = get(&app, "/models/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["count"].as_u64(), Some(all["models"].as_array().unwrap().len() as u64));

    let (status, one) = get(&app, "/models/metrics/gold").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["commodity"], "gold");
    assert_eq!(one["status"], "insufficient_data");
}

#[tokio::test]
async fn scheduler_stays_idle_when_disabled() {
    let (state, app) = test_app();
    let scheduler = Scheduler::start(state.jobs_enabled(), pricemon_api::jobs::default_jobs(&state), state.clone());
    assert!(!scheduler.is_running());

    for uri in ["/", "/health", "/stats", "/models/metrics", "/models/metrics/gold"] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "uri={uri}");
    }
    scheduler.shutdown().await;
}

#[tokio::test]
async fn unknown_and_invalid_commodities() {
    let (_, app) = test_app();

    let (status, body) = get(&app, "/models/metrics/unobtainium").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, body) = get(&app, "/models/metrics/not%20valid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, _) = get(&app, "/prices/unobtainium").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ingest_updates_stats_history_and_metrics() {
    let (_, app) = test_app();

    for (ts, price) in [(1_700_000_000u64, 100.0), (1_700_000_060, 110.0), (1_700_000_120, 99.0)] {
        let (status, ack) = send(
            &app,
            Method::POST,
            "/prices",
            Some(json!({ "commodity": "Gold", "price": price, "timestamp": ts })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(ack["commodity"], "gold");
    }

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["total_price_records"], 3);
    assert_eq!(stats["records_by_commodity"]["gold"], 3);
    assert_eq!(stats["latest_update"], 1_700_000_120u64);

    let (status, hist) = get(&app, "/prices/gold?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hist["count"], 2);
    assert_eq!(hist["prices"][1]["price"], 99.0);

    let (_, m) = get(&app, "/models/metrics/gold").await;
    assert_eq!(m["status"], "ready");
    assert_eq!(m["samples"], 2);
    assert!((m["mae"].as_f64().unwrap() - 10.5).abs() < 1e-9);
}

#[tokio::test]
async fn ingest_rejects_bad_records() {
    let (_, app) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/prices",
        Some(json!({ "commodity": "gold", "price": 0.0, "timestamp": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, _) = send(
        &app,
        Method::POST,
        "/prices",
        Some(json!({ "commodity": "wheat", "price": 5.0, "timestamp": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/prices", Some(json!({ "price": 5.0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/prices/gold?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_config_is_served() {
    let (_, app) = test_app();
    let (status, body) = get(&app, "/dashboard/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chart_height"], 400);
    assert_eq!(body["chart_template"], "plotly_white");
    assert_eq!(body["auto_refresh_interval_secs"], 30);
}

#[tokio::test]
async fn ops_endpoints() {
    let (state, app) = test_app();
    let _ = get(&app, "/stats").await;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(
        axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec(),
    )
    .unwrap();
    assert!(text.contains("pricemon_http_requests_total{method=\"GET\",route=\"/stats\",status=\"200\"} 1"));
    assert!(text.contains("pricemon_background_jobs_enabled 0"));

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    state.set_draining();
    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let (_, health) = get(&app, "/health").await;
    assert_eq!(health["status"], "draining");
}

#[tokio::test]
async fn ingest_metric_labels_do_not_grow_with_sources() {
    let (state, app) = test_app();

    for i in 0..20u64 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/prices",
            Some(json!({ "commodity": "gold", "price": 1900.0, "timestamp": 1 + i, "source": format!("feed-{i}") })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    assert_eq!(state.metrics().prices_ingested.get(&[("commodity", "gold")]), 20);
    let text = state.metrics().render(&[]);
    assert_eq!(text.matches("pricemon_prices_ingested_total{").count(), 1);
    assert!(!text.contains("feed-"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/prices",
        Some(json!({ "commodity": "gold", "price": 1900.0, "timestamp": 99, "source": "x".repeat(200) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}
