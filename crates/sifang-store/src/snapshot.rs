use serde::{Deserialize, Serialize};

use sifang_ledger::Ledger;
use sifang_types::Mode;

/// Current snapshot format version. Bump on incompatible layout changes;
/// plays the role the original's versioned storage key played.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The single persisted record: the full ledger plus the current mode.
///
/// Storage is always overwritten whole from the in-memory state, never
/// read-modify-written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub mode: Mode,
    #[serde(flatten)]
    pub ledger: Ledger,
}

impl GameSnapshot {
    /// Capture the current state for persistence.
    pub fn capture(mode: Mode, ledger: &Ledger) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            mode,
            ledger: ledger.clone(),
        }
    }
}
