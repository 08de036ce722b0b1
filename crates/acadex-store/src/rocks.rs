//! RocksDB store backend for local deployments.

use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, Options, DB};
use std::path::Path;

use acadex_core::{Cid, Credential, CredentialId, UserId, UserProfile};

use crate::content::derive_cid;
use crate::error::StoreError;
use crate::traits::{ContentStore, CredentialStore, ProfileStore};

/// Column family names for the portal collections.
const CF_PROFILES: &str = "profiles";
const CF_CREDENTIALS: &str = "credentials";
const CF_DOCUMENTS: &str = "documents";

/// RocksDB-backed store. Records are stored as JSON documents keyed by
/// their identifier; documents are stored raw, keyed by content address.
pub struct RocksStore {
    db: DB,
}

impl RocksStore {
    /// Open or create a database at the given path with the portal's
    /// column families.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path)?;

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors = vec![
            ColumnFamilyDescriptor::new(CF_PROFILES, Options::default()),
            ColumnFamilyDescriptor::new(CF_CREDENTIALS, Options::default()),
            ColumnFamilyDescriptor::new(CF_DOCUMENTS, Options::default()),
        ];

        let db = DB::open_cf_descriptors(&opts, path, cf_descriptors)?;

        Ok(Self { db })
    }

    fn put(&self, cf_name: &str, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| StoreError::Backend(format!("column family '{}' not found", cf_name)))?;
        self.db.put_cf(&cf, key, value)?;
        Ok(())
    }

    fn get(&self, cf_name: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| StoreError::Backend(format!("column family '{}' not found", cf_name)))?;
        let value = self.db.get_cf(&cf, key)?;
        Ok(value)
    }

    fn delete(&self, cf_name: &str, key: &[u8]) -> Result<(), StoreError> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| StoreError::Backend(format!("column family '{}' not found", cf_name)))?;
        self.db.delete_cf(&cf, key)?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for RocksStore {
    async fn fetch_profile(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError> {
        match self.get(CF_PROFILES, id.as_str().as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&profile)?;
        self.put(CF_PROFILES, profile.id.as_str().as_bytes(), &bytes)
    }

    async fn link_credential(
        &self,
        user: &UserId,
        credential: &CredentialId,
    ) -> Result<(), StoreError> {
        let mut profile = self
            .fetch_profile(user)
            .await?
            .ok_or_else(|| StoreError::ProfileMissing(user.to_string()))?;
        profile.link_credential(credential.clone());
        self.upsert_profile(profile).await
    }
}

#[async_trait]
impl CredentialStore for RocksStore {
    async fn fetch_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        match self.get(CF_CREDENTIALS, id.as_str().as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn insert_credential(&self, credential: Credential) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&credential)?;
        self.put(CF_CREDENTIALS, credential.id.as_str().as_bytes(), &bytes)?;
        tracing::debug!(credential = %credential.id, "credential stored");
        Ok(())
    }

    async fn remove_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        let existing = self.fetch_credential(id).await?;
        if existing.is_some() {
            self.delete(CF_CREDENTIALS, id.as_str().as_bytes())?;
        }
        Ok(existing)
    }
}

#[async_trait]
impl ContentStore for RocksStore {
    async fn put_document(&self, bytes: &[u8]) -> Result<Cid, StoreError> {
        let cid = derive_cid(bytes);
        self.put(CF_DOCUMENTS, cid.as_str().as_bytes(), bytes)?;
        Ok(cid)
    }

    async fn fetch_document(&self, cid: &Cid) -> Result<Option<Vec<u8>>, StoreError> {
        self.get(CF_DOCUMENTS, cid.as_str().as_bytes())
    }
}
