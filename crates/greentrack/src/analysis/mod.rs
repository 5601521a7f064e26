pub mod badge;
pub mod benchmark;
pub mod domain;
pub mod emissions;
pub mod footprint;
pub mod intake;
pub mod provider;
pub mod reconcile;
pub mod reference;
pub mod report;
pub mod roi;
pub mod router;
pub mod scenario;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use badge::{classify, Badge};
pub use domain::{BusinessCategory, EmissionFactors, Provenance, Resource, UsageRecord};
pub use footprint::{assess_footprint, FootprintResult};
pub use intake::{UsageImportError, UsageSubmission};
pub use reference::{ReferenceData, ReferenceDataError};
pub use report::views::SustainabilityReport;
pub use report::{build_report, AnalysisError};
pub use router::analysis_router;
pub use scenario::{simulate, ScenarioInput, ScenarioReport};
pub use service::SustainabilityService;
