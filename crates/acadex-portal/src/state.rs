//! Submission lifecycle state machine.
//!
//! A credential submission moves through a fixed write order: validate the
//! draft, store the document, write the credential record, link it into the
//! holder's profile. The machine makes that order explicit and rejects any
//! step taken out of turn.

use std::fmt;

use crate::error::PortalError;

/// States of a credential submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    /// Draft received, not yet validated.
    Draft,
    /// Required fields verified.
    Validated,
    /// Document persisted to the content store.
    DocumentStored,
    /// Credential record written.
    RecordWritten,
    /// Record linked into the holder's profile. Final state.
    Completed,
    /// Record written but not linked; needs reconciliation. Final state.
    ReconciliationRequired,
}

impl SubmissionState {
    /// Whether this is a final (terminal) state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::ReconciliationRequired)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Validated => write!(f, "Validated"),
            Self::DocumentStored => write!(f, "DocumentStored"),
            Self::RecordWritten => write!(f, "RecordWritten"),
            Self::Completed => write!(f, "Completed"),
            Self::ReconciliationRequired => write!(f, "ReconciliationRequired"),
        }
    }
}

/// Events that advance a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Required fields verified.
    Validate,
    /// Document persisted, content address obtained.
    StoreDocument,
    /// Credential record written to the store.
    WriteRecord,
    /// Record linked into the holder's profile.
    LinkProfile,
    /// Profile link failed after the record was written.
    FlagReconciliation,
}

/// Drives submission state transitions.
///
/// Valid transitions:
/// - Draft → Validated (Validate)
/// - Validated → DocumentStored (StoreDocument)
/// - DocumentStored → RecordWritten (WriteRecord)
/// - RecordWritten → Completed (LinkProfile)
/// - RecordWritten → ReconciliationRequired (FlagReconciliation)
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    /// Attempt a state transition based on an event.
    /// Returns the new state on success, or an error for invalid transitions.
    pub fn transition(
        current: SubmissionState,
        event: SubmissionEvent,
    ) -> Result<SubmissionState, PortalError> {
        let new_state = match (current, event) {
            (SubmissionState::Draft, SubmissionEvent::Validate) => SubmissionState::Validated,
            (SubmissionState::Validated, SubmissionEvent::StoreDocument) => {
                SubmissionState::DocumentStored
            }
            (SubmissionState::DocumentStored, SubmissionEvent::WriteRecord) => {
                SubmissionState::RecordWritten
            }
            (SubmissionState::RecordWritten, SubmissionEvent::LinkProfile) => {
                SubmissionState::Completed
            }
            (SubmissionState::RecordWritten, SubmissionEvent::FlagReconciliation) => {
                SubmissionState::ReconciliationRequired
            }
            _ => {
                let target = match event {
                    SubmissionEvent::Validate => SubmissionState::Validated,
                    SubmissionEvent::StoreDocument => SubmissionState::DocumentStored,
                    SubmissionEvent::WriteRecord => SubmissionState::RecordWritten,
                    SubmissionEvent::LinkProfile => SubmissionState::Completed,
                    SubmissionEvent::FlagReconciliation => {
                        SubmissionState::ReconciliationRequired
                    }
                };
                return Err(PortalError::InvalidTransition {
                    from: current,
                    to: target,
                });
            }
        };

        tracing::debug!(
            from = %current,
            to = %new_state,
            event = ?event,
            "submission state transition"
        );

        Ok(new_state)
    }

    /// Check if a transition is valid without performing it.
    pub fn can_transition(current: SubmissionState, event: SubmissionEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
