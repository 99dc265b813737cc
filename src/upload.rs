use std::sync::Arc;

use crate::api::AnalysisBackend;
use crate::models::{IngestionResult, UploadCandidate, UploadState};

/// Pre-conversation phase: holds at most one candidate file and drives the
/// single ingestion request. Once `submit` returns an [`IngestionResult`] the
/// controller is done; the shell retires it and opens a conversation session.
pub struct UploadController {
    backend: Arc<dyn AnalysisBackend>,
    state: UploadState,
    candidate: Option<UploadCandidate>,
    error: Option<String>,
}

impl UploadController {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            state: UploadState::Empty,
            candidate: None,
            error: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Pick a file, replacing any previous pick and clearing any earlier
    /// error. Ignored while a submission is in flight or after hand-off.
    /// File type is not checked here; the backend rejects unsupported content.
    pub fn select_file(&mut self, filename: impl Into<String>, bytes: Vec<u8>) {
        if !matches!(self.state, UploadState::Empty | UploadState::FileSelected) {
            return;
        }
        self.candidate = Some(UploadCandidate {
            filename: filename.into(),
            bytes,
        });
        self.error = None;
        self.state = UploadState::FileSelected;
    }

    /// Discard the current pick ("Change File").
    pub fn clear_file(&mut self) {
        if self.state != UploadState::FileSelected {
            return;
        }
        self.candidate = None;
        self.error = None;
        self.state = UploadState::Empty;
    }

    /// Send the candidate to the backend. Valid only in `FileSelected`; any
    /// other state is a no-op, so at most one request is ever in flight per
    /// controller and nothing is retried automatically.
    ///
    /// On failure the candidate is kept and the state returns to
    /// `FileSelected` so the user can retry without re-picking the file.
    pub async fn submit(&mut self) -> Option<IngestionResult> {
        if self.state != UploadState::FileSelected {
            return None;
        }
        let candidate = self.candidate.as_ref()?;
        let filename = candidate.filename.clone();
        let bytes = candidate.bytes.clone();

        self.state = UploadState::Submitting;
        self.error = None;

        match self.backend.ingest(&filename, &bytes).await {
            Ok(result) => {
                self.state = UploadState::Done;
                self.candidate = None;
                Some(result)
            }
            Err(e) => {
                tracing::warn!(filename = %filename, error = %e, "ingestion failed");
                self.error = Some(e.to_string());
                self.state = UploadState::FileSelected;
                None
            }
        }
    }
}
