use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable for '{key}': {reason}")]
    Unavailable { key: String, reason: String },

    #[error("Stored collection '{key}' is corrupt: {source}")]
    Corruption {
        key: String,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StorageError {
    pub fn unavailable(key: &str, reason: impl std::fmt::Display) -> Self {
        StorageError::Unavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
