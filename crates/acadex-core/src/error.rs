/// Core domain errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("invalid credential id: {0}")]
    InvalidCredentialId(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
