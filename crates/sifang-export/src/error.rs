/// Errors from export operations.
///
/// Failures are reported once to the user; there is no automatic retry and
/// no partial output is kept.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
