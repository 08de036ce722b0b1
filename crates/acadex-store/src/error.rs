/// Store layer errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store is unreachable or timed out. Retryable.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A profile that must exist for the operation is absent.
    #[error("profile not found: {0}")]
    ProfileMissing(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this fault is transient and worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<rocksdb::Error> for StoreError {
    fn from(err: rocksdb::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
