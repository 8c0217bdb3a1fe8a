use sifang_types::RoundId;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A round reached the ledger with a non-zero score sum. The entry state
    /// machine gates commits, so this indicates a programming defect.
    #[error("invariant violation: round scores sum to {sum}, expected 0")]
    InvariantViolation { sum: i64 },

    #[error("round {0} not found")]
    RoundNotFound(RoundId),
}
