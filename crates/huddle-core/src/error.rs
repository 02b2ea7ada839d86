use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuddleError {
    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Keys
    #[error("Malformed storage key: {0}")]
    MalformedKey(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // Backends
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    // Serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HuddleError>;
