//! Orchestration facade for sifang, a four-player score keeper.
//!
//! [`ScoreKeeper`] is the single entry point the presentation layer talks
//! to: it owns the ledger, the pending round entry, and the persistence
//! gateway, and dispatches one user intent at a time on one logical thread.
//! Every ledger or mode mutation is followed by a fire-and-forget snapshot
//! save; destructive intents pass through a [`ConfirmPrompt`] first.

pub mod confirm;
pub mod error;
pub mod keeper;

pub use confirm::{AlwaysConfirm, ConfirmPrompt, NeverConfirm};
pub use error::AppError;
pub use keeper::ScoreKeeper;
