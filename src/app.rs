use std::sync::Arc;

use crate::api::AnalysisBackend;
use crate::session::ConversationSession;
use crate::upload::UploadController;

/// Which of the two interactive components currently owns the screen.
pub enum Phase {
    Upload(UploadController),
    Conversation(ConversationSession),
}

/// Top-level shell: owns exactly one phase at a time, performs the
/// upload → conversation hand-off, and resets back to a fresh upload phase.
/// No state survives the reset.
pub struct App {
    backend: Arc<dyn AnalysisBackend>,
    phase: Phase,
}

impl App {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        let phase = Phase::Upload(UploadController::new(backend.clone()));
        Self { backend, phase }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The upload controller, if the app is in the upload phase.
    pub fn upload_mut(&mut self) -> Option<&mut UploadController> {
        match &mut self.phase {
            Phase::Upload(controller) => Some(controller),
            Phase::Conversation(_) => None,
        }
    }

    /// The conversation session, if one is active.
    pub fn session_mut(&mut self) -> Option<&mut ConversationSession> {
        match &mut self.phase {
            Phase::Conversation(session) => Some(session),
            Phase::Upload(_) => None,
        }
    }

    /// Drive the upload submission. On success the controller is retired and
    /// a conversation session seeded from the result takes over; on failure
    /// the upload phase stays put with its error recorded.
    pub async fn submit_upload(&mut self) {
        if let Phase::Upload(controller) = &mut self.phase {
            if let Some(result) = controller.submit().await {
                self.phase =
                    Phase::Conversation(ConversationSession::new(self.backend.clone(), result));
            }
        }
    }

    /// "Upload another file": discard the session and its transcript and
    /// start over with an empty controller. No backend call is made.
    pub fn reset(&mut self) {
        self.phase = Phase::Upload(UploadController::new(self.backend.clone()));
    }
}
