use async_trait::async_trait;

use acadex_core::{Cid, Credential, CredentialId, UserId, UserProfile};

use crate::error::StoreError;

/// Keyed access to the profile collection.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by user id. `Ok(None)` means the profile does not
    /// exist; `Err` is reserved for store faults.
    async fn fetch_profile(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError>;

    /// Create or replace a profile.
    async fn upsert_profile(&self, profile: UserProfile) -> Result<(), StoreError>;

    /// Append a credential reference to an existing profile.
    /// Fails with `StoreError::ProfileMissing` if the profile is absent.
    async fn link_credential(
        &self,
        user: &UserId,
        credential: &CredentialId,
    ) -> Result<(), StoreError>;
}

/// Keyed access to the credential collection.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch a credential by id. `Ok(None)` means the record is absent.
    async fn fetch_credential(&self, id: &CredentialId)
        -> Result<Option<Credential>, StoreError>;

    /// Insert a credential record.
    async fn insert_credential(&self, credential: Credential) -> Result<(), StoreError>;

    /// Remove a credential record, returning it if present.
    async fn remove_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError>;
}

/// Content-addressed document storage.
///
/// The returned `Cid` is derived from the document bytes: storing identical
/// bytes twice yields the same address.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store a document and return its content address.
    async fn put_document(&self, bytes: &[u8]) -> Result<Cid, StoreError>;

    /// Fetch a document by content address.
    async fn fetch_document(&self, cid: &Cid) -> Result<Option<Vec<u8>>, StoreError>;
}
