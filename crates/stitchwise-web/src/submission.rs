//! Submission lifecycle state machine.
//!
//! One analysis may be in flight at a time. The lifecycle is
//! Idle → Pending → (Idle on success | Failed on error); Failed gates like
//! Idle, so the user can resubmit immediately. Success is completed by the
//! handler placing the record into the handoff slot.

use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending { id: Uuid },
    Failed { message: String },
}

#[derive(Debug)]
pub struct SubmissionGate {
    phase: Mutex<SubmissionPhase>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self { phase: Mutex::new(SubmissionPhase::Idle) }
    }

    /// Start a submission. Returns the attempt id, or `None` while another
    /// analysis is pending — in that case no request may be issued.
    pub fn begin(&self) -> Option<Uuid> {
        let mut phase = self.lock();
        if matches!(*phase, SubmissionPhase::Pending { .. }) {
            return None;
        }
        let id = Uuid::new_v4();
        *phase = SubmissionPhase::Pending { id };
        Some(id)
    }

    /// The external call settled successfully.
    pub fn succeed(&self) {
        *self.lock() = SubmissionPhase::Idle;
    }

    /// The external call settled with an error. The message is surfaced
    /// inline on the submission view; resubmission is allowed right away.
    pub fn fail(&self, message: impl Into<String>) {
        *self.lock() = SubmissionPhase::Failed { message: message.into() };
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.lock(), SubmissionPhase::Pending { .. })
    }

    /// The error from the last settled attempt, if it failed.
    pub fn last_error(&self) -> Option<String> {
        match &*self.lock() {
            SubmissionPhase::Failed { message } => Some(message.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SubmissionPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}
