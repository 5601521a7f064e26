use super::super::badge::Badge;
use super::super::domain::{ActionCategory, Provenance};
use super::super::footprint::FootprintResult;
use super::super::intake::UsageSubmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: ActionCategory,
    pub title: String,
    pub description: String,
    pub savings: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSavings {
    pub monthly: String,
    pub yearly: String,
    pub breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub energy: Vec<Recommendation>,
    pub waste: Vec<Recommendation>,
    pub cost_savings: CostSavings,
    pub reduction_potential: i64,
}

impl RecommendationSet {
    /// Energy items first, then waste, each in their listed order.
    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.energy.iter().chain(self.waste.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    #[serde(rename = "averageCO2")]
    pub average_co2: f64,
    #[serde(rename = "yourCO2")]
    pub your_co2: f64,
    /// Signed, rounded percentage difference from the peer average.
    pub difference: i64,
    /// Absolute value of `difference`.
    pub percentage: i64,
    pub comparison: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_range: Option<String>,
    pub source: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEntry {
    pub title: String,
    pub upfront_cost: i64,
    pub monthly_savings: i64,
    pub payback_months: f64,
    pub category: ActionCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveCategory {
    Solar,
    Energy,
    Waste,
    Tax,
    Other,
}

impl IncentiveCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "solar" => Self::Solar,
            "energy" => Self::Energy,
            "waste" => Self::Waste,
            "tax" => Self::Tax,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveEntry {
    pub title: String,
    pub description: String,
    pub eligibility: String,
    pub value: String,
    pub category: IncentiveCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

/// Which path produced each independently reconciled subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubsectionSources {
    pub recommendations: Provenance,
    pub benchmark: Provenance,
    pub roi: Provenance,
    pub incentives: Provenance,
}

impl SubsectionSources {
    pub const fn all_static() -> Self {
        Self {
            recommendations: Provenance::Static,
            benchmark: Provenance::Static,
            roi: Provenance::Static,
            incentives: Provenance::Static,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityReport {
    pub footprint: FootprintResult,
    pub recommendations: RecommendationSet,
    pub badge: Badge,
    pub business_data: UsageSubmission,
    pub benchmark: BenchmarkResult,
    pub roi: Vec<RoiEntry>,
    pub incentives: Vec<IncentiveEntry>,
    pub sources: SubsectionSources,
    pub generated_at: DateTime<Utc>,
}
