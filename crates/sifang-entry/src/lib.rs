//! Round entry state machine for sifang, a four-player score keeper.
//!
//! This crate owns the transient, not-yet-committed score entry for the
//! current round. It provides:
//! - [`ScoreBuffer`] — one raw signed-integer text buffer with the keypad
//!   character rules (length cap, leading-zero handling, sign cycling)
//! - [`PendingEntry`] — the four buffers plus the active-seat pointer,
//!   smart balance on seat selection, and the zero-sum commit gate
//! - [`EntryState`] — `Idle` → `Editing` → `Balanced`, cycling every round
//!
//! Nothing here is persisted; a pending entry is reset after every commit or
//! explicit clear.

pub mod buffer;
pub mod entry;
pub mod error;

pub use buffer::ScoreBuffer;
pub use entry::{EntryState, PendingEntry};
pub use error::EntryError;
