use serde::{Deserialize, Serialize};

use sifang_types::{PlayerId, DEFAULT_PLAYER_NAMES, MAX_NAME_LENGTH};

/// One seated player: stable identity, display name, running total.
///
/// The total is mutated only by the owning [`Ledger`](crate::Ledger) when a
/// round is applied or deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_score: i64,
}

impl Player {
    /// A fresh player with the default name for their seat and a zero total.
    pub fn at_seat(id: PlayerId) -> Self {
        Self {
            id,
            name: DEFAULT_PLAYER_NAMES[id.seat_index()].to_string(),
            total_score: 0,
        }
    }

    /// Apply a new display name. Empty or whitespace-only names are rejected
    /// and the current name is kept; accepted names are trimmed and truncated
    /// to [`MAX_NAME_LENGTH`] characters. Returns `true` if the name changed.
    pub fn rename(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let bounded: String = trimmed.chars().take(MAX_NAME_LENGTH).collect();
        if bounded == self.name {
            return false;
        }
        self.name = bounded;
        true
    }
}
