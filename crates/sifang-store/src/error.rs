/// Errors from snapshot store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored record exists but cannot be decoded. Callers discard it
    /// and fall back to the default initial state.
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    /// Serialization failure while writing a snapshot.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
