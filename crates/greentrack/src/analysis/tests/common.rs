use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::analysis::intake::UsageSubmission;
use crate::analysis::provider::{ProviderError, TextProvider};
use crate::analysis::reference::ReferenceData;
use crate::analysis::service::SustainabilityService;

pub(super) const ANALYSIS_REPLY: &str = r#"```json
{
  "energy": [
    {"title": "Switch to LED Lighting", "description": "Replace tube lights", "savings": "₹3,000/month", "impact": "90 kg CO2/month"}
  ],
  "waste": [
    {"title": "Start On-Site Composting", "description": "Compost kitchen scraps", "savings": "₹1,500/month", "impact": "45 kg CO2/month"}
  ],
  "reductionPotential": 35,
  "benchmark": {"averageCO2": 2000, "context": "Dine-in restaurants"},
  "incentives": "none that apply"
}
```"#;

#[derive(Debug, Clone)]
pub(super) enum Script {
    Reply(String),
    Fail,
    Hang,
}

/// Provider double that answers every prompt with the same script and keeps
/// the prompts it was sent.
pub(super) struct ScriptedProvider {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub(super) fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log").clone()
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .expect("prompt log")
            .push(prompt.to_string());

        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail => Err(ProviderError::Transport("connection reset".to_string())),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(String::new())
            }
        }
    }
}

pub(super) fn reference() -> Arc<ReferenceData> {
    Arc::new(ReferenceData::embedded().expect("embedded reference data"))
}

pub(super) fn static_service() -> Arc<SustainabilityService> {
    Arc::new(SustainabilityService::static_only(reference()))
}

pub(super) fn scripted_service(script: Script) -> (Arc<SustainabilityService>, Arc<ScriptedProvider>) {
    let provider = ScriptedProvider::new(script);
    let service = SustainabilityService::new(
        reference(),
        Some(provider.clone() as Arc<dyn TextProvider>),
        Duration::from_millis(200),
    );
    (Arc::new(service), provider)
}

pub(super) fn restaurant() -> UsageSubmission {
    UsageSubmission {
        business_type: "Restaurant".to_string(),
        employees: Some("10".to_string()),
        yearly_revenue: Some("1800000".to_string()),
        electricity_usage: Some("1500".to_string()),
        water_usage: Some("5000".to_string()),
        waste_generated: Some("200".to_string()),
        fuel_used: Some("100".to_string()),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
