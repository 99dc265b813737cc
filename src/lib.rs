//! Client session core for the MultiSummarizer document analysis service:
//! upload a document, receive an initial summary, then hold a multi-turn
//! conversation over it. Presentation is left to the embedding UI; this crate
//! owns the state machines and the backend API client.

pub mod api;
pub mod app;
pub mod models;
pub mod session;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_util;

pub use api::http::HttpBackend;
pub use api::{AnalysisBackend, ApiError, BackendConfig};
pub use app::{App, Phase};
pub use models::{IngestionResult, SessionStatus, Speaker, Turn, UploadCandidate, UploadState};
pub use session::{ConversationSession, FALLBACK_REPLY};
pub use upload::UploadController;
