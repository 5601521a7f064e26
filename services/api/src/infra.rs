use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use greentrack::analysis::{ReferenceData, SustainabilityService};
use greentrack::config::AppConfig;
use greentrack::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads reference data and wires the configured provider, if any.
pub(crate) fn build_service(config: &AppConfig) -> Result<Arc<SustainabilityService>, AppError> {
    let reference = Arc::new(ReferenceData::load(&config.reference)?);
    Ok(Arc::new(SustainabilityService::from_config(
        reference,
        &config.provider,
    )))
}
