use std::sync::Arc;

use crate::api::AnalysisBackend;
use crate::models::{IngestionResult, SessionStatus, Speaker, Turn};

/// Canned reply appended when a query fails. The failure itself is logged and
/// never propagates past the session.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error processing your request.";

/// Post-ingestion phase: an append-only transcript over one document and the
/// serialized submission of follow-up queries.
///
/// The transcript always starts with the backend's initial summary as an
/// assistant turn, and every user turn is followed by exactly one assistant
/// turn (answer or fallback) before the next query is accepted.
pub struct ConversationSession {
    backend: Arc<dyn AnalysisBackend>,
    filename: String,
    transcript: Vec<Turn>,
    status: SessionStatus,
}

impl ConversationSession {
    pub fn new(backend: Arc<dyn AnalysisBackend>, result: IngestionResult) -> Self {
        Self {
            backend,
            filename: result.filename,
            transcript: vec![Turn::new(Speaker::Assistant, result.initial_summary)],
            status: SessionStatus::AwaitingInput,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Submit a follow-up question. Blank input and calls made while a reply
    /// is pending are silently ignored, so at most one query is outstanding
    /// and assistant turns land in question order.
    ///
    /// The request carries only the question text; the backend resolves which
    /// document is under discussion from its own session state.
    pub async fn submit_query(&mut self, text: &str) {
        if self.status != SessionStatus::AwaitingInput {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.transcript.push(Turn::new(Speaker::User, text));
        self.status = SessionStatus::AwaitingReply;

        let reply = match self.backend.query(text).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(filename = %self.filename, error = %e, "query failed");
                FALLBACK_REPLY.to_string()
            }
        };

        self.transcript.push(Turn::new(Speaker::Assistant, reply));
        self.status = SessionStatus::AwaitingInput;
    }
}
