use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api::{AnalysisBackend, ApiError};
use crate::models::IngestionResult;

/// Scripted stand-in for the analysis service. Responses are consumed in
/// FIFO order; an unscripted call fails with a 500.
pub(crate) struct FakeBackend {
    ingest_responses: Mutex<VecDeque<Result<IngestionResult, ApiError>>>,
    query_responses: Mutex<VecDeque<Result<String, ApiError>>>,
    ingest_calls: AtomicUsize,
    query_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            ingest_responses: Mutex::new(VecDeque::new()),
            query_responses: Mutex::new(VecDeque::new()),
            ingest_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
        }
    }

    pub fn push_ingest_ok(&self, filename: &str, preview: &str) {
        self.ingest_responses
            .lock()
            .unwrap()
            .push_back(Ok(IngestionResult {
                filename: filename.to_string(),
                initial_summary: preview.to_string(),
            }));
    }

    pub fn push_ingest_err(&self, status: u16, message: &str) {
        self.ingest_responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Backend {
                status,
                message: message.to_string(),
            }));
    }

    pub fn push_query_ok(&self, summary: &str) {
        self.query_responses
            .lock()
            .unwrap()
            .push_back(Ok(summary.to_string()));
    }

    pub fn push_query_err(&self, status: u16, message: &str) {
        self.query_responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Backend {
                status,
                message: message.to_string(),
            }));
    }

    pub fn ingest_calls(&self) -> usize {
        self.ingest_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    fn unscripted() -> ApiError {
        ApiError::Backend {
            status: 500,
            message: "no scripted response".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for FakeBackend {
    async fn ingest(&self, _filename: &str, _bytes: &[u8]) -> Result<IngestionResult, ApiError> {
        self.ingest_calls.fetch_add(1, Ordering::SeqCst);
        self.ingest_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted()))
    }

    async fn query(&self, _text: &str) -> Result<String, ApiError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.query_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted()))
    }
}
