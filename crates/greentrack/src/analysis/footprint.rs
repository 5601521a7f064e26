use super::domain::{EmissionFactors, UsageRecord};
use super::emissions::{compute_emissions, EmissionBreakdown};
use super::scoring::{reduction_potential, score_footprint, FootprintScore};
use serde::Serialize;

/// Footprint derived from exactly one usage record. Recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    pub breakdown: EmissionBreakdown,
    pub footprint_score: FootprintScore,
    pub score_label: &'static str,
}

impl FootprintResult {
    pub fn reduction_potential(&self) -> i64 {
        reduction_potential(self.footprint_score)
    }
}

/// Emission model followed by the footprint scorer. Shared by the report
/// pipeline and the scenario simulator.
pub fn assess_footprint(usage: &UsageRecord, factors: &EmissionFactors) -> FootprintResult {
    let emissions = compute_emissions(usage, factors);
    let footprint_score = score_footprint(emissions.total, usage.employees);

    FootprintResult {
        total_co2: emissions.total,
        breakdown: emissions.breakdown,
        footprint_score,
        score_label: footprint_score.label(),
    }
}
