/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record could not be mapped to SQL arguments
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`, passed through unmodified
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Criteria (de)serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// Create a mapping error
    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<StorageError> for chorus_core::ChorusError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => {
                chorus_core::ChorusError::NotFound { entity, id }
            }
            StorageError::InvalidInput(msg) => chorus_core::ChorusError::InvalidInput(msg),
            other => chorus_core::ChorusError::storage(other.to_string()),
        }
    }
}
