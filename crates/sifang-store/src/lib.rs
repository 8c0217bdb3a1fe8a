//! Persistence gateway for sifang, a four-player score keeper.
//!
//! The in-memory ledger is the sole source of truth; storage is a write-after
//! -mutation sink that is always fully overwritten from it. This crate
//! provides:
//!
//! - [`GameSnapshot`] — the single serialized record: players, rounds, dealer,
//!   and current mode, loaded once at startup
//! - [`SnapshotStore`] — the gateway boundary trait
//! - [`InMemorySnapshotStore`] — for tests and embedding
//! - [`JsonFileStore`] — full-overwrite JSON file backend
//!
//! A malformed stored record is reported as [`StoreError::Malformed`]; the
//! caller recovers by discarding it and starting from the default state.

pub mod error;
pub mod file;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemorySnapshotStore;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
pub use traits::SnapshotStore;
