//! Merges an untrusted provider reply with the deterministic reference path.
//!
//! The reply is free-form text that may or may not contain a JSON object. Each
//! subsection (recommendations, benchmark, ROI, incentives) is validated on
//! its own and replaced by its static equivalent when absent or invalid, so a
//! partly useful reply still contributes whatever parsed cleanly.

mod extract;
mod savings;
mod sections;


use super::benchmark::static_benchmark;
use super::domain::{ActionCategory, Provenance, UsageRecord};
use super::footprint::FootprintResult;
use super::reference::{defaults, ReferenceData};
use super::report::views::{
    BenchmarkResult, IncentiveEntry, Recommendation, RecommendationSet, RoiEntry,
    SubsectionSources,
};
use super::report::AnalysisError;
use super::roi::{catalog_candidates, rank_roi};
use super::scoring::clamp_reduction_potential;
use serde_json::{Map, Value};
use tracing::debug;

/// Why a reply, or one subsection of it, could not be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseFailure {
    #[error("provider reply unavailable")]
    Unavailable,
    #[error("reply contains no balanced JSON object")]
    NoJsonObject,
    #[error("reply object is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("reply JSON is not an object")]
    NotAnObject,
    #[error("reply has no {0} section")]
    MissingSection(&'static str),
    #[error("{section} section rejected: {reason}")]
    InvalidSection {
        section: &'static str,
        reason: String,
    },
}

impl ParseFailure {
    pub(crate) fn invalid(section: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSection {
            section,
            reason: reason.into(),
        }
    }
}

/// Extracts and parses the first JSON object in a provider reply.
pub fn parse_reply(reply: Option<&str>) -> Result<Map<String, Value>, ParseFailure> {
    let reply = reply.ok_or(ParseFailure::Unavailable)?;
    let candidate = extract::first_balanced_object(reply).ok_or(ParseFailure::NoJsonObject)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(root)) => Ok(root),
        Ok(_) => Err(ParseFailure::NotAnObject),
        Err(err) => Err(ParseFailure::InvalidJson(err.to_string())),
    }
}

/// The four reconciled subsections and where each one came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub recommendations: RecommendationSet,
    pub benchmark: BenchmarkResult,
    pub roi: Vec<RoiEntry>,
    pub incentives: Vec<IncentiveEntry>,
    pub sources: SubsectionSources,
}

/// Resolves every subsection independently. Never fails because of the reply;
/// the only error is reference data that cannot produce a benchmark.
pub fn reconcile(
    reply: Option<&str>,
    usage: &UsageRecord,
    footprint: &FootprintResult,
    reference: &ReferenceData,
) -> Result<Reconciled, AnalysisError> {
    let parsed = parse_reply(reply);
    if let Err(failure) = &parsed {
        if *failure != ParseFailure::Unavailable {
            debug!(reason = %failure, "provider reply unusable, every subsection falls back");
        }
    }
    let root = parsed.as_ref().ok();

    let mut sources = SubsectionSources::all_static();

    let reduction_potential = root
        .and_then(sections::parse_reduction_potential)
        .map(|value| clamp_reduction_potential(value.round() as i64))
        .unwrap_or_else(|| footprint.reduction_potential());

    let recommendations = match root
        .ok_or(ParseFailure::Unavailable)
        .and_then(sections::parse_recommendations)
    {
        Ok(ai) => {
            sources.recommendations = Provenance::AiGenerated;
            let energy = fill_domain(ai.energy, usage, ActionCategory::Energy);
            let waste = fill_domain(ai.waste, usage, ActionCategory::Waste);
            let cost_savings = ai
                .cost_savings
                .unwrap_or_else(|| savings::summarize_savings(energy.iter().chain(waste.iter())));
            RecommendationSet {
                energy,
                waste,
                cost_savings,
                reduction_potential,
            }
        }
        Err(failure) => {
            log_fallback("recommendations", &failure);
            static_recommendations(usage, reduction_potential)
        }
    };

    let benchmark = match root
        .ok_or(ParseFailure::Unavailable)
        .and_then(|root| sections::parse_benchmark(root, footprint.total_co2))
    {
        Ok(benchmark) => {
            sources.benchmark = Provenance::AiGenerated;
            benchmark
        }
        Err(failure) => {
            log_fallback("benchmark", &failure);
            static_benchmark(
                footprint.total_co2,
                usage.category,
                usage.size_bucket(),
                &reference.benchmarks,
            )
            .ok_or(AnalysisError::BenchmarkUnavailable {
                category: usage.category,
                bucket: usage.size_bucket(),
            })?
        }
    };

    let roi = match root
        .ok_or(ParseFailure::Unavailable)
        .and_then(|root| sections::parse_roi(root, &recommendations, &reference.roi_catalog))
    {
        Ok(candidates) => {
            sources.roi = Provenance::AiGenerated;
            rank_roi(candidates)
        }
        Err(failure) => {
            log_fallback("roi", &failure);
            rank_roi(catalog_candidates(&recommendations, &reference.roi_catalog))
        }
    };

    let incentives = match root
        .ok_or(ParseFailure::Unavailable)
        .and_then(sections::parse_incentives)
    {
        Ok(incentives) => {
            sources.incentives = Provenance::AiGenerated;
            incentives
        }
        Err(failure) => {
            log_fallback("incentives", &failure);
            defaults::incentives_for(usage.category)
        }
    };

    Ok(Reconciled {
        recommendations,
        benchmark,
        roi,
        incentives,
        sources,
    })
}

/// Fully static recommendation block for a usage record.
pub fn static_recommendations(usage: &UsageRecord, reduction_potential: i64) -> RecommendationSet {
    let energy = defaults::recommendations_for(usage.category, ActionCategory::Energy);
    let waste = defaults::recommendations_for(usage.category, ActionCategory::Waste);
    let cost_savings = savings::summarize_savings(energy.iter().chain(waste.iter()));

    RecommendationSet {
        energy,
        waste,
        cost_savings,
        reduction_potential,
    }
}

/// A provider reply that filled only one domain gets the static items for the
/// other.
fn fill_domain(
    authored: Vec<Recommendation>,
    usage: &UsageRecord,
    domain: ActionCategory,
) -> Vec<Recommendation> {
    if authored.is_empty() {
        defaults::recommendations_for(usage.category, domain)
    } else {
        authored
    }
}

fn log_fallback(section: &'static str, failure: &ParseFailure) {
    if *failure != ParseFailure::Unavailable {
        debug!(section, reason = %failure, "falling back to static subsection");
    }
}
