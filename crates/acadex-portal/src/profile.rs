//! Profile resolution against the profile collection.

use std::sync::Arc;

use acadex_core::{UserId, UserProfile};
use acadex_store::ProfileStore;

use crate::error::PortalError;

/// Resolves a user id to its full profile record.
///
/// Distinguishes permanent absence (`ProfileNotFound` — render the
/// empty/new-user state) from transient store faults (`StoreUnavailable` —
/// retryable, never fatal to the page). Pure read, no side effects.
pub struct ProfileResolver {
    store: Arc<dyn ProfileStore>,
}

impl ProfileResolver {
    /// Create a resolver over a profile store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Resolve a user's profile.
    pub async fn resolve(&self, user: &UserId) -> Result<UserProfile, PortalError> {
        let profile = self.store.fetch_profile(user).await.map_err(|e| {
            if e.is_transient() {
                PortalError::StoreUnavailable(e.to_string())
            } else {
                PortalError::Store(e)
            }
        })?;

        match profile {
            Some(profile) => {
                tracing::debug!(
                    user = %user,
                    credentials = profile.credential_count(),
                    "profile resolved"
                );
                Ok(profile)
            }
            None => Err(PortalError::ProfileNotFound(user.to_string())),
        }
    }
}
