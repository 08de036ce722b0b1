//! Session context and the identity-provider seam.
//!
//! Authentication itself is owned by an external provider; the portal only
//! consumes its result. Session state lives in an explicit context object
//! with a defined lifecycle — populated on sign-in, cleared on sign-out —
//! and is passed down to the views that need it.

use async_trait::async_trait;

use acadex_core::UserId;

use crate::error::PortalError;

/// Display attributes of an authenticated user, as supplied by the
/// identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    /// Externally assigned user identifier.
    pub id: UserId,
    /// Display name from the provider, if any.
    pub display_name: Option<String>,
    /// Avatar image URL from the provider, if any.
    pub avatar_url: Option<String>,
}

impl AuthenticatedUser {
    /// Create a user with just an id.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            display_name: None,
            avatar_url: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Authentication state of a session. Signed-out is a valid state, never
/// an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// No authenticated user.
    #[default]
    SignedOut,
    /// An authenticated user.
    SignedIn(AuthenticatedUser),
}

/// Session context carrying the current authentication state.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: AuthState,
}

impl SessionContext {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already signed in as the given user.
    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self {
            state: AuthState::SignedIn(user),
        }
    }

    /// Populate the session with an authenticated user.
    pub fn sign_in(&mut self, user: AuthenticatedUser) {
        tracing::info!(user = %user.id, "session signed in");
        self.state = AuthState::SignedIn(user);
    }

    /// Clear the session.
    pub fn sign_out(&mut self) {
        if let AuthState::SignedIn(user) = &self.state {
            tracing::info!(user = %user.id, "session signed out");
        }
        self.state = AuthState::SignedOut;
    }

    /// Current authentication state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&AuthenticatedUser> {
        match &self.state {
            AuthState::SignedIn(user) => Some(user),
            AuthState::SignedOut => None,
        }
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn(_))
    }
}

/// External identity provider. Returns the current authenticated user, or
/// `None` when unauthenticated — absence is a state, not an error.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The currently authenticated user, if any.
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, PortalError>;
}

/// Identity provider with a fixed answer. Backs tests and the local CLI,
/// where the operator names the user explicitly.
pub struct StaticIdentityProvider {
    user: Option<AuthenticatedUser>,
}

impl StaticIdentityProvider {
    /// Provider that always returns the given user.
    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    /// Provider that always reports signed-out.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> Result<Option<AuthenticatedUser>, PortalError> {
        Ok(self.user.clone())
    }
}
