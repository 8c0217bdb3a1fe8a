//! Printable settlement export for sifang, a four-player score keeper.
//!
//! An export is a read-only, point-in-time capture of the ledger: all four
//! totals plus the full round history with per-round per-player scores and
//! timestamps. The exporter never observes mutations made after capture.
//!
//! The output is the plain-text settlement sheet (the original app rendered
//! the same data to a printable page); [`SettlementSheet::to_json`] offers a
//! machine-readable alternative.

pub mod error;
pub mod sheet;

pub use error::ExportError;
pub use sheet::{RoundLine, SettlementSheet};
