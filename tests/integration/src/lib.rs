//! Shared harness for the integration scenarios: an in-memory store with
//! per-credential delay and failure injection, plus a switch to take the
//! profile collection offline.

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use acadex_core::{Cid, Credential, CredentialId, CredentialKind, UserId, UserProfile};
use acadex_store::{ContentStore, CredentialStore, MemoryStore, ProfileStore, StoreError};

/// In-memory store with fault injection for driving the partial-failure,
/// latency, and reconciliation scenarios.
#[derive(Default)]
pub struct StoreHarness {
    inner: MemoryStore,
    credential_delays: DashMap<String, Duration>,
    failing_credentials: DashSet<String>,
    profiles_down: AtomicBool,
}

impl StoreHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a delay before a credential lookup completes.
    pub fn delay_credential(&self, id: &str, delay: Duration) {
        self.credential_delays.insert(id.to_string(), delay);
    }

    /// Make lookups for a credential fault with a transient error.
    pub fn fail_credential(&self, id: &str) {
        self.failing_credentials.insert(id.to_string());
    }

    /// Take the profile collection offline (all writes and reads fault).
    pub fn set_profiles_down(&self, down: bool) {
        self.profiles_down.store(down, Ordering::SeqCst);
    }

    pub async fn seed_profile(&self, profile: UserProfile) {
        self.inner.upsert_profile(profile).await.unwrap();
    }

    pub async fn seed_credential(&self, credential: Credential) {
        self.inner.insert_credential(credential).await.unwrap();
    }

    fn check_profiles(&self) -> Result<(), StoreError> {
        if self.profiles_down.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("profile collection down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for StoreHarness {
    async fn fetch_profile(&self, id: &UserId) -> Result<Option<UserProfile>, StoreError> {
        self.check_profiles()?;
        self.inner.fetch_profile(id).await
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<(), StoreError> {
        self.check_profiles()?;
        self.inner.upsert_profile(profile).await
    }

    async fn link_credential(
        &self,
        user: &UserId,
        credential: &CredentialId,
    ) -> Result<(), StoreError> {
        self.check_profiles()?;
        self.inner.link_credential(user, credential).await
    }
}

#[async_trait]
impl CredentialStore for StoreHarness {
    async fn fetch_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        // Copy the delay out so no map guard is held across the await
        let delay = self.credential_delays.get(id.as_str()).map(|d| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_credentials.contains(id.as_str()) {
            return Err(StoreError::Unavailable("injected credential fault".into()));
        }
        self.inner.fetch_credential(id).await
    }

    async fn insert_credential(&self, credential: Credential) -> Result<(), StoreError> {
        self.inner.insert_credential(credential).await
    }

    async fn remove_credential(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, StoreError> {
        self.inner.remove_credential(id).await
    }
}

#[async_trait]
impl ContentStore for StoreHarness {
    async fn put_document(&self, bytes: &[u8]) -> Result<Cid, StoreError> {
        self.inner.put_document(bytes).await
    }

    async fn fetch_document(&self, cid: &Cid) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.fetch_document(cid).await
    }
}

/// Build a credential record with a fixed id for seeding.
pub fn make_credential(id: &str, kind: &str, holder: &str) -> Credential {
    Credential {
        id: CredentialId::new(id).unwrap(),
        kind: CredentialKind::from_label(kind),
        title: format!("Credential {}", id),
        institution: "Test University".into(),
        holder: UserId::new(holder).unwrap(),
        created_at: chrono::Utc::now(),
        cid: Cid::new(format!("Qm{}", id)),
    }
}

/// Build a profile referencing the given credential ids.
pub fn make_profile(user: &str, credential_ids: &[&str]) -> UserProfile {
    let mut profile = UserProfile::new(UserId::new(user).unwrap());
    for id in credential_ids {
        profile.link_credential(CredentialId::new(*id).unwrap());
    }
    profile
}
