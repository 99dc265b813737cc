use serde::{Deserialize, Serialize};

/// A document the user has picked but not yet handed to the backend.
///
/// At most one candidate exists at a time; picking another file replaces it
/// wholesale.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadCandidate {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Artifact of one successful ingestion: the echoed filename and the initial
/// machine-generated summary (markdown). Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionResult {
    pub filename: String,
    pub initial_summary: String,
}

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            speaker,
            text: text.into(),
        }
    }
}

/// State machine of the upload phase. A failed submission is observable as
/// `FileSelected` plus a recorded error, which is exactly the retryable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Empty,
    FileSelected,
    Submitting,
    Done,
}

/// Whether the session accepts a new query right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    AwaitingInput,
    AwaitingReply,
}
