use acadex_core::{Cid, CredentialId};

use crate::state::SubmissionState;

/// Portal core errors.
///
/// Per-credential lookup failures never appear here — the aggregator absorbs
/// them into its report. Only profile-resolution failure, submission failure,
/// and aggregate preconditions surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The profile does not exist. Permanent; callers render the
    /// empty/new-user state.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// The store is unreachable or timed out. Retryable; callers surface a
    /// non-blocking notice and keep prior state.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A credential reference in the input list is structurally unusable.
    #[error("invalid credential reference: {0}")]
    InvalidCredentialRef(String),

    /// The enclosing view was torn down while lookups were in flight.
    #[error("aggregation cancelled")]
    Cancelled,

    /// Draft validation failed; submission is blocked.
    #[error("validation failed for fields: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// The credential record was written but linking it to the holder's
    /// profile failed. The reference must be reconciled, not lost.
    #[error("credential {credential} (cid {cid}) written but not linked to profile: {reason}")]
    Reconciliation {
        credential: CredentialId,
        cid: Cid,
        reason: String,
    },

    /// Invalid submission state transition.
    #[error("invalid submission transition from {from} to {to}")]
    InvalidTransition {
        from: SubmissionState,
        to: SubmissionState,
    },

    #[error("core error: {0}")]
    Core(#[from] acadex_core::CoreError),

    #[error("store error: {0}")]
    Store(#[from] acadex_store::StoreError),
}

impl PortalError {
    /// Whether this failure is transient and worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::StoreUnavailable(_) => true,
            Self::Store(e) => e.is_transient(),
            _ => false,
        }
    }
}
