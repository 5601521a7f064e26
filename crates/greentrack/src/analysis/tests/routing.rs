use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::analysis::router::analysis_router;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn analyze_route_returns_full_report() {
    let router = analysis_router(static_service());

    let response = router
        .oneshot(post_json(
            "/api/analyze",
            json!({
                "businessType": "Restaurant",
                "employees": "10",
                "electricityUsage": "1500",
                "waterUsage": "5000",
                "wasteGenerated": "200",
                "fuelUsed": "100"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    for key in [
        "footprint",
        "recommendations",
        "badge",
        "businessData",
        "benchmark",
        "roi",
        "incentives",
        "sources",
    ] {
        assert!(payload.get(key).is_some(), "missing {key}");
    }
    assert_eq!(payload["badge"], "Silver");
    assert_eq!(payload["footprint"]["footprintScore"], 75);
    assert_eq!(payload["businessData"]["electricityUsage"], "1500");
    assert_eq!(payload["sources"]["benchmark"], "static");
}

#[tokio::test]
async fn analyze_route_coerces_missing_fields() {
    let router = analysis_router(static_service());

    let response = router
        .oneshot(post_json("/api/analyze", json!({ "businessType": "Bakery" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["footprint"]["totalCO2"], 0.0);
    assert_eq!(payload["footprint"]["footprintScore"], 15);
    assert_eq!(payload["businessData"]["businessType"], "Bakery");
}

#[tokio::test]
async fn analyze_route_reports_overflow_as_generic_failure() {
    let router = analysis_router(static_service());

    let response = router
        .oneshot(post_json(
            "/api/analyze",
            json!({ "businessType": "Office", "fuelUsed": "1e308", "electricityUsage": "1e308" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Failed to analyze business data");
    assert!(payload.get("details").is_some());
}

#[tokio::test]
async fn analyze_route_rejects_non_json_bodies() {
    let router = analysis_router(static_service());

    let response = router
        .oneshot(
            Request::post("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("businessType=Office"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scenario_insights_route_always_answers() {
    let router = analysis_router(static_service());

    let response = router
        .oneshot(post_json(
            "/api/scenario-insights",
            json!({
                "scenario": {"electricity": 20, "water": 10, "waste": 15, "fuel": 5},
                "originalFootprint": 1842.5,
                "newFootprint": 1500.0,
                "businessType": "Restaurant"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["insights"]
        .as_str()
        .unwrap_or_default()
        .starts_with("With these reductions"));
}

#[tokio::test]
async fn simulate_route_projects_scenario() {
    let (service, _) = scripted_service(Script::Fail);
    let router = analysis_router(service);

    let response = router
        .oneshot(post_json(
            "/api/scenario/simulate",
            json!({
                "businessData": {
                    "businessType": "Office",
                    "employees": 12,
                    "electricityUsage": 1000,
                    "waterUsage": 2000,
                    "wasteGenerated": 100,
                    "fuelUsed": 50
                },
                "scenario": {"electricity": 90, "water": 40, "waste": 50, "fuel": 40}
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scenario"]["electricity"], 50.0);
    assert_eq!(payload["badge"], "Gold");
    assert!(payload.get("insights").is_none());
    assert!(payload["reductionPercent"].as_f64().unwrap_or_default() > 48.0);
}
