//! Score ledger for sifang, a four-player score keeper.
//!
//! This crate owns the durable game record. It provides:
//! - [`Player`] and [`Round`] domain records
//! - [`RoundScores`], four signed per-round scores that must sum to zero
//! - [`Ledger`], the invariant-preserving aggregate: apply/delete rounds,
//!   reset scores, rename seats, reassign the dealer
//!
//! Every committed round nets to zero across the four seats, so the grand
//! total over all running scores is zero at all times. Totals are exactly the
//! fold of the round history; deleting a round subtracts its contribution.

pub mod error;
pub mod ledger;
pub mod player;
pub mod round;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use player::Player;
pub use round::{Round, RoundScores};
