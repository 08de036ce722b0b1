//! Dashboard composition: profile resolution feeding credential
//! aggregation, with semantic notices for the presentation layer.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use acadex_core::{Credential, UserId, UserProfile};
use acadex_store::{ContentStore, CredentialStore, ProfileStore};

use crate::aggregator::CredentialAggregator;
use crate::error::PortalError;
use crate::profile::ProfileResolver;
use crate::session::{AuthenticatedUser, SessionContext};
use crate::submit::{CredentialDraft, CredentialSubmitter, SubmissionAck};

/// Semantic outcome for the presentation layer to surface. The core emits
/// outcomes, not display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Some credential lookups failed; the rest of the dashboard is intact.
    CredentialsLoadFailed { count: usize },
}

/// The resolved state of a dashboard view.
#[derive(Debug, Clone)]
pub enum Dashboard {
    /// No authenticated user; render the signed-out state.
    SignedOut,
    /// Authenticated user with no profile record yet; render the
    /// new-user/guest state.
    NewUser { user: AuthenticatedUser },
    /// Profile resolved and credentials aggregated. `credentials` may be
    /// empty ("No credentials found" is a valid, non-error view).
    Ready {
        profile: UserProfile,
        credentials: Vec<Credential>,
        notices: Vec<Notice>,
    },
}

impl Dashboard {
    /// The resolved credentials, if any view of them exists.
    pub fn credentials(&self) -> &[Credential] {
        match self {
            Self::Ready { credentials, .. } => credentials,
            _ => &[],
        }
    }

    /// Notices the caller should surface.
    pub fn notices(&self) -> &[Notice] {
        match self {
            Self::Ready { notices, .. } => notices,
            _ => &[],
        }
    }
}

/// The portal core: wires the profile resolver, credential aggregator, and
/// submission workflow over shared stores.
pub struct Portal {
    resolver: ProfileResolver,
    aggregator: CredentialAggregator,
    submitter: CredentialSubmitter,
}

impl Portal {
    /// Create a portal over the three store seams.
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        credentials: Arc<dyn CredentialStore>,
        content: Arc<dyn ContentStore>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            resolver: ProfileResolver::new(profiles.clone()),
            aggregator: CredentialAggregator::new(credentials.clone(), lookup_timeout),
            submitter: CredentialSubmitter::new(content, credentials, profiles),
        }
    }

    /// Load the dashboard for the current session.
    ///
    /// A signed-out session and a signed-in user without a profile are both
    /// valid view states, not errors. Only a transient store fault
    /// propagates, for the caller to surface as a dismissible notice while
    /// keeping prior rendered state.
    pub async fn load_dashboard(
        &self,
        session: &SessionContext,
    ) -> Result<Dashboard, PortalError> {
        self.load(session, None).await
    }

    /// Like [`load_dashboard`](Self::load_dashboard), abandoning in-flight
    /// lookups when the token fires (view teardown).
    pub async fn load_dashboard_cancellable(
        &self,
        session: &SessionContext,
        cancel: CancellationToken,
    ) -> Result<Dashboard, PortalError> {
        self.load(session, Some(cancel)).await
    }

    async fn load(
        &self,
        session: &SessionContext,
        cancel: Option<CancellationToken>,
    ) -> Result<Dashboard, PortalError> {
        let user = match session.current_user() {
            Some(user) => user.clone(),
            None => return Ok(Dashboard::SignedOut),
        };

        let profile = match self.resolver.resolve(&user.id).await {
            Ok(profile) => profile,
            Err(PortalError::ProfileNotFound(_)) => {
                tracing::info!(user = %user.id, "no profile record; new-user dashboard");
                return Ok(Dashboard::NewUser { user });
            }
            Err(e) => return Err(e),
        };

        let report = match cancel {
            Some(token) => {
                self.aggregator
                    .resolve_cancellable(&profile.credential_ids, token)
                    .await?
            }
            None => self.aggregator.resolve(&profile.credential_ids).await?,
        };

        let notices = report.notice().into_iter().collect();
        Ok(Dashboard::Ready {
            profile,
            credentials: report.credentials,
            notices,
        })
    }

    /// Submit a credential draft for a holder.
    pub async fn submit_credential(
        &self,
        holder: &UserId,
        draft: CredentialDraft,
    ) -> Result<SubmissionAck, PortalError> {
        self.submitter.submit(holder, draft).await
    }
}
