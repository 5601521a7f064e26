//! Seam for the external generative text provider.
//!
//! The engine never talks to the network itself; the service hands a prompt
//! to whatever [`TextProvider`] is wired in, bounded by a timeout, and treats
//! every failure as "no reply".

mod prompts;
mod replay;

pub use prompts::{analysis_prompt, scenario_prompt};
pub use replay::ReplayProvider;

use crate::config::ProviderConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
    #[error("provider returned an empty reply")]
    EmptyReply,
    #[error("provider transport failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Chooses the provider for this process. No API key means no provider and
/// every report takes the static path.
pub fn provider_from_config(config: &ProviderConfig) -> Option<Arc<dyn TextProvider>> {
    if !config.is_configured() {
        info!("OPENAI_API_KEY not set, sustainability reports use static reference data");
        return None;
    }

    match &config.replay_path {
        Some(path) => {
            info!(path = %path.display(), "serving provider replies from capture");
            Some(Arc::new(ReplayProvider::new(path.clone())))
        }
        None => {
            warn!("provider key present but no transport configured, using static reference data");
            None
        }
    }
}

/// Single attempt bounded by `timeout`. Blank replies count as failures.
pub async fn complete_with_timeout(
    provider: &dyn TextProvider,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ProviderError> {
    let reply = tokio::time::timeout(timeout, provider.complete(prompt))
        .await
        .map_err(|_| ProviderError::Timeout(timeout))??;

    if reply.trim().is_empty() {
        return Err(ProviderError::EmptyReply);
    }
    Ok(reply)
}
