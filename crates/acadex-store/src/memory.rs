//! In-memory store backend over concurrent maps.

use async_trait::async_trait;
use dashmap::DashMap;

use acadex_core::{Cid, Credential, CredentialId, UserId, UserProfile};

use crate::content::derive_cid;
use crate::error::StoreError;
use crate::traits::{ContentStore, CredentialStore, ProfileStore};

/// In-memory backend implementing all three store traits. Used by tests
/// and by embedders that supply their own persistence.
#[derive(Default)]
pub struct MemoryStore {
    profiles: DashMap<UserId, UserProfile>,
    credentials: DashMap<CredentialId, Credential>,
    documents: DashMap<Cid, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Number of stored credentials.
    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn fetch_profile(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.get(id).map(|e| e.clone()))
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<(), StoreError> {
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    async fn link_credential(
        &self,
        user: &UserId,
        credential: &CredentialId,
    ) -> Result<(), StoreError> {
        let mut entry = self
            .profiles
            .get_mut(user)
            .ok_or_else(|| StoreError::ProfileMissing(user.to_string()))?;
        entry.link_credential(credential.clone());
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn fetch_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        Ok(self.credentials.get(id).map(|e| e.clone()))
    }

    async fn insert_credential(&self, credential: Credential) -> Result<(), StoreError> {
        let id = credential.id.clone();
        self.credentials.insert(id.clone(), credential);
        tracing::debug!(credential = %id, "credential stored");
        Ok(())
    }

    async fn remove_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        Ok(self.credentials.remove(id).map(|(_, c)| c))
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn put_document(&self, bytes: &[u8]) -> Result<Cid, StoreError> {
        let cid = derive_cid(bytes);
        self.documents.insert(cid.clone(), bytes.to_vec());
        Ok(cid)
    }

    async fn fetch_document(&self, cid: &Cid) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.documents.get(cid).map(|e| e.clone()))
    }
}
