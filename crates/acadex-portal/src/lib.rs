//! Acadex Portal Core
//!
//! The data-access layer behind the credential portal UI:
//! - Session context with an explicit sign-in/sign-out lifecycle
//! - Profile resolution against the profile collection
//! - Concurrent, all-settle credential aggregation
//! - Credential submission with content-addressed document storage
//! - Dashboard composition and semantic notices
//!
//! The core is side-effect-free towards the presentation layer: it returns
//! values and notices, never display strings or UI callbacks.

pub mod aggregator;
pub mod dashboard;
pub mod error;
pub mod profile;
pub mod session;
pub mod state;
pub mod submit;

pub use aggregator::{AggregateReport, CredentialAggregator};
pub use dashboard::{Dashboard, Notice, Portal};
pub use error::PortalError;
pub use profile::ProfileResolver;
pub use session::{
    AuthState, AuthenticatedUser, IdentityProvider, SessionContext, StaticIdentityProvider,
};
pub use state::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
pub use submit::{CredentialDraft, CredentialSubmitter, SubmissionAck};
