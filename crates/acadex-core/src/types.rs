use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::CoreError;

/// Opaque user identifier, assigned by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user id. Empty identifiers are rejected — the caller
    /// owns authentication state and must never hand down a blank id.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::InvalidUserId(
                "user id must be non-empty".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque credential identifier, assigned by the store at record creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialId(pub String);

impl CredentialId {
    /// Create a credential id from an existing string.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::InvalidCredentialId(
                "credential id must be non-empty".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Mint a fresh credential id (UUIDv7, time-ordered).
    pub fn generate() -> Self {
        Self(format!("cred-{}", Uuid::now_v7()))
    }

    /// Get the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is structurally usable as a store key.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content address of a stored document. Opaque to everything outside the
/// content store: never parsed, never validated, only used for retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cid(pub String);

impl Cid {
    /// Wrap an externally produced content address.
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    /// Get the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of academic credentials handled by the portal.
///
/// The label is an open string in practice; unknown labels round-trip
/// through `Other` rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKind {
    /// Academic degree (bachelor's, master's, doctorate).
    Degree,
    /// Course or program certificate.
    Certificate,
    /// Diploma.
    Diploma,
    /// Academic transcript.
    Transcript,
    /// Any other credential label.
    Other(String),
}

impl CredentialKind {
    /// Parse a free-form label into a kind. Matching is case-insensitive;
    /// anything unrecognized becomes `Other` with the original label.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "degree" => Self::Degree,
            "certificate" => Self::Certificate,
            "diploma" => Self::Diploma,
            "transcript" => Self::Transcript,
            _ => Self::Other(label.to_string()),
        }
    }

    /// The display label for this kind.
    pub fn label(&self) -> &str {
        match self {
            Self::Degree => "degree",
            Self::Certificate => "certificate",
            Self::Diploma => "diploma",
            Self::Transcript => "transcript",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stored academic-credential record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique credential identifier.
    pub id: CredentialId,
    /// Kind of credential (degree, certificate, ...).
    pub kind: CredentialKind,
    /// Credential title (e.g., "BSc Computer Science").
    pub title: String,
    /// Issuing institution, free text.
    pub institution: String,
    /// User the credential belongs to.
    pub holder: UserId,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Content address of the source document.
    pub cid: Cid,
}

impl Credential {
    /// Create a new credential record with a freshly minted id.
    pub fn new(
        kind: CredentialKind,
        title: impl Into<String>,
        institution: impl Into<String>,
        holder: UserId,
        cid: Cid,
    ) -> Self {
        Self {
            id: CredentialId::generate(),
            kind,
            title: title.into(),
            institution: institution.into(),
            holder,
            created_at: Utc::now(),
            cid,
        }
    }

    /// Year the credential was issued, for display.
    pub fn issued_year(&self) -> i32 {
        self.created_at.year()
    }
}

/// A user's profile record as stored in the profile collection.
///
/// Created and mutated by external systems; the portal reads it once per
/// dashboard view and appends to `credential_ids` on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Externally assigned user identifier.
    pub id: UserId,
    /// Optional display name.
    pub display_name: Option<String>,
    /// Ordered credential references; each may or may not resolve.
    pub credential_ids: Vec<CredentialId>,
}

impl UserProfile {
    /// Create an empty profile for a user.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            display_name: None,
            credential_ids: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Append a credential reference if not already present.
    pub fn link_credential(&mut self, id: CredentialId) {
        if !self.credential_ids.contains(&id) {
            self.credential_ids.push(id);
        }
    }

    /// Number of referenced credentials.
    pub fn credential_count(&self) -> usize {
        self.credential_ids.len()
    }
}
