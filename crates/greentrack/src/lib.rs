//! Carbon footprint scoring and sustainability reporting for small businesses.
//!
//! The [`analysis`] tree holds the deterministic engine (emissions, scoring,
//! badges, reference data, reconciliation of provider output, ROI ranking,
//! benchmarks and scenario simulation) together with the service and router
//! that expose it over HTTP.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
