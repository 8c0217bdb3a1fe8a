use serde::{Deserialize, Serialize};

use sifang_types::{PlayerId, RoundId, Timestamp, PLAYER_COUNT};

/// Signed per-round scores for the four seats, in seating order.
///
/// A committed round always nets to zero; [`RoundScores`] itself does not
/// enforce that, the [`Ledger`](crate::Ledger) re-validates on apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundScores([i64; PLAYER_COUNT]);

impl RoundScores {
    pub fn new(scores: [i64; PLAYER_COUNT]) -> Self {
        Self(scores)
    }

    /// The score for the given player.
    pub fn get(&self, id: PlayerId) -> i64 {
        self.0[id.seat_index()]
    }

    /// Sum across all four seats.
    pub fn sum(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Whether the round nets to zero.
    pub fn is_zero_sum(&self) -> bool {
        self.sum() == 0
    }

    /// Scores in seating order.
    pub fn as_array(&self) -> &[i64; PLAYER_COUNT] {
        &self.0
    }

    /// `(player, score)` pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        PlayerId::all().map(|id| (id, self.get(id)))
    }
}

/// One committed round: identity, commit time, and the four scores.
///
/// Immutable once created; the only reversal is deletion through the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub timestamp: Timestamp,
    pub scores: RoundScores,
}

impl Round {
    /// A round committed now with a fresh identity.
    pub fn commit_now(scores: RoundScores) -> Self {
        Self {
            id: RoundId::new(),
            timestamp: Timestamp::now(),
            scores,
        }
    }
}
