use serde::{Deserialize, Serialize};
use tracing::debug;

use sifang_types::{PlayerId, RoundId, PLAYER_COUNT};

use crate::error::LedgerError;
use crate::player::Player;
use crate::round::Round;

/// The durable game record: four seated players, the committed round history
/// (most-recent-first), and the current dealer.
///
/// All mutations preserve two invariants:
/// - every round in history nets to zero across the four seats
/// - each player's `total_score` equals the fold of their per-round scores
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    players: [Player; PLAYER_COUNT],
    rounds: Vec<Round>,
    dealer: PlayerId,
}

impl Ledger {
    /// A fresh table: default seat names, empty history, seat 1 dealing.
    pub fn new() -> Self {
        let players = [
            Player::at_seat(PlayerId::from_seat(0).expect("seat 0")),
            Player::at_seat(PlayerId::from_seat(1).expect("seat 1")),
            Player::at_seat(PlayerId::from_seat(2).expect("seat 2")),
            Player::at_seat(PlayerId::from_seat(3).expect("seat 3")),
        ];
        Self {
            players,
            rounds: Vec::new(),
            dealer: PlayerId::first(),
        }
    }

    /// Restore a ledger from its persisted parts. Totals are trusted as
    /// stored; `verify_totals` is available for callers that want the check.
    pub fn from_parts(
        players: [Player; PLAYER_COUNT],
        rounds: Vec<Round>,
        dealer: PlayerId,
    ) -> Self {
        Self {
            players,
            rounds,
            dealer,
        }
    }

    // ---- Mutations ----

    /// Commit a finalized round: prepend to history and add each score to the
    /// matching player's total.
    ///
    /// The zero-sum rule is re-validated here even though the entry state
    /// machine already gates commits.
    pub fn apply_round(&mut self, round: Round) -> Result<(), LedgerError> {
        if !round.scores.is_zero_sum() {
            return Err(LedgerError::InvariantViolation {
                sum: round.scores.sum(),
            });
        }

        for player in &mut self.players {
            player.total_score += round.scores.get(player.id);
        }
        debug!(round = %round.id.short_id(), "round applied");
        self.rounds.insert(0, round);
        Ok(())
    }

    /// Delete a round by identity, reversing its effect on every total.
    /// All-or-nothing; there is no partial edit of a past round.
    pub fn delete_round(&mut self, id: RoundId) -> Result<Round, LedgerError> {
        let position = self
            .rounds
            .iter()
            .position(|r| r.id == id)
            .ok_or(LedgerError::RoundNotFound(id))?;

        let round = self.rounds.remove(position);
        for player in &mut self.players {
            player.total_score -= round.scores.get(player.id);
        }
        debug!(round = %round.id.short_id(), "round deleted");
        Ok(round)
    }

    /// Zero every total and clear the history, keeping names, identities,
    /// and the dealer. Used for "new match, same seats".
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.total_score = 0;
        }
        self.rounds.clear();
        debug!("scores reset, history cleared");
    }

    /// Rename one seat. Blank names are rejected (previous name kept);
    /// returns `true` if the name changed.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> bool {
        self.players[id.seat_index()].rename(name)
    }

    /// Rename all four seats at once, applying the per-seat blank-name rule.
    pub fn rename_players(&mut self, names: &[String; PLAYER_COUNT]) {
        for (player, name) in self.players.iter_mut().zip(names.iter()) {
            player.rename(name);
        }
    }

    /// Reassign the dealer marker.
    pub fn set_dealer(&mut self, id: PlayerId) {
        self.dealer = id;
    }

    // ---- Queries ----

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.seat_index()]
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Committed rounds, most recent first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn find_round(&self, id: RoundId) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// Sum of all running totals. Always zero while the invariants hold.
    pub fn grand_total(&self) -> i64 {
        self.players.iter().map(|p| p.total_score).sum()
    }

    /// The player with the highest strictly positive total, if any.
    /// Ties go to the earlier seat.
    pub fn leader(&self) -> Option<PlayerId> {
        // max_by_key keeps the last maximum; reverse so ties resolve to
        // the earlier seat.
        self.players
            .iter()
            .rev()
            .filter(|p| p.total_score > 0)
            .max_by_key(|p| p.total_score)
            .map(|p| p.id)
    }

    /// Check that every total matches the fold of the round history.
    pub fn verify_totals(&self) -> bool {
        self.players.iter().all(|player| {
            let folded: i64 = self
                .rounds
                .iter()
                .map(|r| r.scores.get(player.id))
                .sum();
            folded == player.total_score
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
