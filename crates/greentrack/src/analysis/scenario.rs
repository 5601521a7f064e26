use super::badge::{classify, Badge};
use super::domain::{EmissionFactors, Resource, UsageRecord};
use super::footprint::{assess_footprint, FootprintResult};
use super::intake::UsageSubmission;
use serde::{Deserialize, Serialize};

/// Hypothetical percentage reductions per resource. Transient; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    pub electricity: f64,
    pub water: f64,
    pub waste: f64,
    pub fuel: f64,
}

impl ScenarioInput {
    pub const fn max_percent(resource: Resource) -> f64 {
        match resource {
            Resource::Electricity | Resource::Waste => 50.0,
            Resource::Water | Resource::Fuel => 40.0,
        }
    }

    pub fn knob(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Electricity => self.electricity,
            Resource::Water => self.water,
            Resource::Waste => self.waste,
            Resource::Fuel => self.fuel,
        }
    }

    /// Every knob forced into `[0, max]` for its resource. Non-finite knobs
    /// become zero.
    pub fn clamped(&self) -> Self {
        let clamp = |resource: Resource| {
            let value = self.knob(resource);
            if value.is_finite() {
                value.clamp(0.0, Self::max_percent(resource))
            } else {
                0.0
            }
        };

        Self {
            electricity: clamp(Resource::Electricity),
            water: clamp(Resource::Water),
            waste: clamp(Resource::Waste),
            fuel: clamp(Resource::Fuel),
        }
    }
}

/// Side-effect-free projection of a usage record under a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub scenario: ScenarioInput,
    pub original_footprint: FootprintResult,
    pub new_footprint: FootprintResult,
    pub reduction: f64,
    pub reduction_percent: f64,
    pub badge: Badge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
}

impl ScenarioReport {
    pub fn insight_request(&self, business_type: &str) -> ScenarioInsightRequest {
        ScenarioInsightRequest {
            scenario: self.scenario,
            original_footprint: self.original_footprint.total_co2,
            new_footprint: self.new_footprint.total_co2,
            business_type: business_type.to_string(),
        }
    }
}

pub fn simulate(base: &UsageRecord, knobs: &ScenarioInput, factors: &EmissionFactors) -> ScenarioReport {
    let scenario = knobs.clamped();
    let adjusted = base.map_quantities(|resource, quantity| {
        quantity * (1.0 - scenario.knob(resource) / 100.0)
    });

    let original_footprint = assess_footprint(base, factors);
    let new_footprint = assess_footprint(&adjusted, factors);
    let reduction = original_footprint.total_co2 - new_footprint.total_co2;
    let reduction_percent = reduction_percent(original_footprint.total_co2, new_footprint.total_co2);

    ScenarioReport {
        scenario,
        badge: classify(reduction_percent),
        original_footprint,
        new_footprint,
        reduction,
        reduction_percent,
        insights: None,
    }
}

/// Zero when there is nothing to reduce.
pub fn reduction_percent(original_total: f64, new_total: f64) -> f64 {
    if original_total > 0.0 {
        (original_total - new_total) / original_total * 100.0
    } else {
        0.0
    }
}

/// Body of `POST /api/scenario/simulate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub business_data: UsageSubmission,
    #[serde(default)]
    pub scenario: ScenarioInput,
}

/// Body of `POST /api/scenario-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInsightRequest {
    #[serde(default)]
    pub scenario: ScenarioInput,
    pub original_footprint: f64,
    pub new_footprint: f64,
    #[serde(default)]
    pub business_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInsightResponse {
    pub insights: String,
}
