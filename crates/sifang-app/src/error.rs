use sifang_entry::EntryError;
use sifang_ledger::LedgerError;

/// Errors surfaced by score keeper intents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
