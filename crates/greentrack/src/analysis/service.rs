use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::intake::UsageSubmission;
use super::provider::{
    analysis_prompt, complete_with_timeout, provider_from_config, scenario_prompt, TextProvider,
};
use super::reference::ReferenceData;
use super::report::views::SustainabilityReport;
use super::report::{assemble_report, checked_footprint, AnalysisError};
use super::scenario::{simulate, ScenarioInsightRequest, ScenarioReport, SimulationRequest};
use crate::config::ProviderConfig;

pub const UNCONFIGURED_INSIGHT: &str = "With these reductions, you could significantly improve your carbon footprint and potentially qualify for better sustainability ratings.";
pub const FALLBACK_INSIGHT: &str = "This reduction would significantly improve your environmental impact and potentially reduce operational costs.";

/// Service composing the reference data with the optional text provider.
///
/// Holds no per-request state; one instance is shared by every handler.
pub struct SustainabilityService {
    reference: Arc<ReferenceData>,
    provider: Option<Arc<dyn TextProvider>>,
    timeout: Duration,
}

impl SustainabilityService {
    pub fn new(
        reference: Arc<ReferenceData>,
        provider: Option<Arc<dyn TextProvider>>,
        timeout: Duration,
    ) -> Self {
        Self {
            reference,
            provider,
            timeout,
        }
    }

    pub fn from_config(reference: Arc<ReferenceData>, config: &ProviderConfig) -> Self {
        Self::new(reference, provider_from_config(config), config.timeout)
    }

    /// Service that never consults a provider.
    pub fn static_only(reference: Arc<ReferenceData>) -> Self {
        Self::new(reference, None, Duration::ZERO)
    }

    pub fn provider_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Full sustainability report for one submission.
    pub async fn analyze(
        &self,
        submission: &UsageSubmission,
    ) -> Result<SustainabilityReport, AnalysisError> {
        let usage = submission.to_record();
        let footprint = checked_footprint(&usage, &self.reference)?;
        let reply = if self.provider.is_some() {
            self.ask(&analysis_prompt(submission, &footprint), "analysis")
                .await
        } else {
            None
        };

        assemble_report(submission, &usage, footprint, reply.as_deref(), &self.reference)
    }

    /// Short explanation of a scenario. Always returns text.
    pub async fn scenario_insight(&self, request: &ScenarioInsightRequest) -> String {
        if self.provider.is_none() {
            return UNCONFIGURED_INSIGHT.to_string();
        }

        match self.ask(&scenario_prompt(request), "scenario insight").await {
            Some(reply) => reply.trim().to_string(),
            None => FALLBACK_INSIGHT.to_string(),
        }
    }

    /// Scenario projection, annotated by the provider when it answers.
    pub async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<ScenarioReport, AnalysisError> {
        let usage = request.business_data.to_record();
        let mut report = simulate(&usage, &request.scenario, &self.reference.factors);
        if !report.original_footprint.total_co2.is_finite() {
            return Err(AnalysisError::NonFiniteTotal);
        }

        if self.provider.is_some() {
            let insight_request = report.insight_request(&request.business_data.business_type);
            report.insights = self
                .ask(&scenario_prompt(&insight_request), "scenario annotation")
                .await
                .map(|reply| reply.trim().to_string());
        }

        Ok(report)
    }

    /// One provider attempt. Any failure is logged and reported as no reply.
    async fn ask(&self, prompt: &str, purpose: &'static str) -> Option<String> {
        let provider = self.provider.as_deref()?;
        match complete_with_timeout(provider, prompt, self.timeout).await {
            Ok(reply) => {
                debug!(provider = provider.name(), purpose, "provider replied");
                Some(reply)
            }
            Err(err) => {
                warn!(provider = provider.name(), purpose, error = %err, "provider call failed");
                None
            }
        }
    }
}
