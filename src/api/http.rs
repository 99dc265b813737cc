use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AnalysisBackend, ApiError, BackendConfig};
use crate::models::IngestionResult;

#[derive(Deserialize)]
struct UploadResponse {
    filename: String,
    preview: String,
}

#[derive(Serialize)]
struct SummarizeRequest {
    query: String,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// reqwest-backed client for the analysis service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: BackendConfig,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for HttpBackend {
    async fn ingest(&self, filename: &str, bytes: &[u8]) -> Result<IngestionResult, ApiError> {
        let part = Part::bytes(bytes.to_vec()).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let resp = self
            .client
            .post(format!("{}/api/upload", self.config.base_url))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::Backend {
                status,
                message: text,
            });
        }

        let data: UploadResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(IngestionResult {
            filename: data.filename,
            initial_summary: data.preview,
        })
    }

    async fn query(&self, text: &str) -> Result<String, ApiError> {
        let body = SummarizeRequest {
            query: text.to_string(),
        };

        let resp = self
            .client
            .post(format!("{}/api/summarize", self.config.base_url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::Backend {
                status,
                message: text,
            });
        }

        let data: SummarizeResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(data.summary)
    }
}
