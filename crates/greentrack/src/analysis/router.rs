use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::intake::UsageSubmission;
use super::scenario::{ScenarioInsightRequest, ScenarioInsightResponse, SimulationRequest};
use super::service::SustainabilityService;
use crate::error::AppError;

/// Router builder exposing the analysis and scenario endpoints.
pub fn analysis_router(service: Arc<SustainabilityService>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/scenario-insights", post(scenario_insights_handler))
        .route("/api/scenario/simulate", post(simulate_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<SustainabilityService>>,
    payload: Result<Json<UsageSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::InvalidRequest(rejection.body_text()).into_response(),
    };

    match service.analyze(&submission).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn scenario_insights_handler(
    State(service): State<Arc<SustainabilityService>>,
    payload: Result<Json<ScenarioInsightRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::InvalidRequest(rejection.body_text()).into_response(),
    };

    let insights = service.scenario_insight(&request).await;
    Json(ScenarioInsightResponse { insights }).into_response()
}

pub(crate) async fn simulate_handler(
    State(service): State<Arc<SustainabilityService>>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::InvalidRequest(rejection.body_text()).into_response(),
    };

    match service.simulate(&request).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
