pub mod http;

use crate::models::IngestionResult;

/// Where the analysis service lives. Injected by the caller instead of being
/// baked into the client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error: {status} - {message}")]
    Backend { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}

/// The two calls the analysis service exposes. Follow-up queries carry only
/// the question text; the backend tracks which document is under discussion.
#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Submit a document for analysis, returning the initial summary.
    async fn ingest(&self, filename: &str, bytes: &[u8]) -> Result<IngestionResult, ApiError>;

    /// Ask a follow-up question about the ingested document.
    async fn query(&self, text: &str) -> Result<String, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(BackendConfig::default().base_url, "http://localhost:8000");
    }
}
