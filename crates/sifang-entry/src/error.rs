use thiserror::Error;

/// Errors produced by entry operations.
///
/// Most keypad operations are silent no-ops when they don't apply; only the
/// commit gate reports a genuine failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry is not balanced: scores sum to {sum}")]
    Unbalanced { sum: i64 },
}
