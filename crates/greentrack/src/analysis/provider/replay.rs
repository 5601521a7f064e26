use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::path::PathBuf;

/// Serves a previously captured provider reply from disk, re-read on every
/// call so the capture can be swapped while the service runs.
#[derive(Debug, Clone)]
pub struct ReplayProvider {
    path: PathBuf,
}

impl ReplayProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TextProvider for ReplayProvider {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_capture_is_an_io_error() {
        let provider = ReplayProvider::new(PathBuf::from("/nonexistent/capture.txt"));
        let err = provider.complete("prompt").await.expect_err("missing file");
        assert!(matches!(err, ProviderError::Io(_)));
    }

    #[tokio::test]
    async fn reads_capture_contents() {
        let path = std::env::temp_dir().join(format!("greentrack-replay-{}.txt", std::process::id()));
        tokio::fs::write(&path, "{\"energy\": []}")
            .await
            .expect("capture written");

        let reply = ReplayProvider::new(path.clone())
            .complete("prompt")
            .await
            .expect("capture read");
        assert_eq!(reply, "{\"energy\": []}");

        tokio::fs::remove_file(&path).await.ok();
    }
}
