//! Acadex Store — Keyed read/write access to the portal's document
//! collections: user profiles, credential records, and content-addressed
//! documents.
//!
//! Absence is data at this layer: a missing record is `Ok(None)`, never an
//! error. `StoreError` is reserved for faults, and `StoreError::is_transient`
//! tells callers which ones are retryable.

pub mod content;
pub mod error;
pub mod memory;
pub mod rocks;
pub mod traits;

pub use content::derive_cid;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use rocks::RocksStore;
pub use traits::{ContentStore, CredentialStore, ProfileStore};
