//! Foundation types for sifang, a four-player score keeper.
//!
//! This crate provides the identity, temporal, and mode types shared by every
//! other sifang crate.
//!
//! # Key Types
//!
//! - [`PlayerId`] — Seat identity, stable for the lifetime of a game (1..=4)
//! - [`RoundId`] — UUID v7 round identifier (time-ordered)
//! - [`Timestamp`] — Wall-clock milliseconds since the UNIX epoch
//! - [`Mode`] — Current app mode, persisted alongside the ledger

pub mod error;
pub mod mode;
pub mod player;
pub mod round_id;
pub mod temporal;

pub use error::TypeError;
pub use mode::Mode;
pub use player::PlayerId;
pub use round_id::RoundId;
pub use temporal::Timestamp;

/// Number of seats at the table. The game is strictly four-player.
pub const PLAYER_COUNT: usize = 4;

/// Maximum display-name length in characters.
pub const MAX_NAME_LENGTH: usize = 6;

/// Maximum score-entry buffer length in characters, including a leading sign.
pub const MAX_BUFFER_LEN: usize = 6;

/// Default seat names: the four cardinal-direction glyphs, in seating order.
pub const DEFAULT_PLAYER_NAMES: [&str; PLAYER_COUNT] = ["東", "南", "西", "北"];
