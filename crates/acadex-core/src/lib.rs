//! Acadex Core — Fundamental types, errors, and configuration for the
//! Acadex academic-credential portal.

pub mod config;
pub mod error;
pub mod types;

pub use config::PortalConfig;
pub use error::CoreError;
pub use types::{Cid, Credential, CredentialId, CredentialKind, UserId, UserProfile};
