use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid player id {0}: must be in 1..=4")]
    InvalidPlayerId(u8),

    #[error("invalid seat index {0}: must be in 0..4")]
    InvalidSeatIndex(usize),
}
