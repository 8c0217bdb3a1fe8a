use tracing::debug;

use sifang_ledger::{Round, RoundScores};
use sifang_types::{PlayerId, PLAYER_COUNT};

use crate::buffer::ScoreBuffer;
use crate::error::EntryError;

/// Lifecycle state of the pending entry. The machine cycles every round;
/// there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryState {
    /// All four buffers empty.
    Idle,
    /// At least one buffer non-empty, but not committable.
    Editing,
    /// Parsed sum is exactly zero and at least one buffer is non-trivial.
    Balanced,
}

/// The in-progress, not-yet-committed score entry for the current round:
/// one raw buffer per seat plus the active-seat pointer.
///
/// Owned exclusively by whoever drives the entry flow; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingEntry {
    buffers: [ScoreBuffer; PLAYER_COUNT],
    active: Option<PlayerId>,
}

impl PendingEntry {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Queries ----

    pub fn active(&self) -> Option<PlayerId> {
        self.active
    }

    pub fn buffer(&self, id: PlayerId) -> &str {
        self.buffers[id.seat_index()].as_str()
    }

    /// Parsed value of one buffer (trivial or malformed parses as 0).
    pub fn value(&self, id: PlayerId) -> i64 {
        self.buffers[id.seat_index()].parse()
    }

    /// Sum of all four parsed buffers.
    pub fn balance_sum(&self) -> i64 {
        self.buffers.iter().map(ScoreBuffer::parse).sum()
    }

    /// Number of buffers holding a non-trivial value.
    pub fn filled_count(&self) -> usize {
        self.buffers.iter().filter(|b| !b.is_trivial()).count()
    }

    /// True if any buffer holds a value worth confirming before discarding.
    pub fn has_nontrivial_input(&self) -> bool {
        self.filled_count() > 0
    }

    /// Whether the entry is committable: balanced to zero with at least one
    /// buffer filled. An all-empty entry is never submittable.
    pub fn is_balanced(&self) -> bool {
        self.balance_sum() == 0 && self.filled_count() > 0
    }

    pub fn state(&self) -> EntryState {
        if self.buffers.iter().all(ScoreBuffer::is_empty) {
            EntryState::Idle
        } else if self.is_balanced() {
            EntryState::Balanced
        } else {
            EntryState::Editing
        }
    }

    // ---- Seat selection ----

    /// Set the active seat.
    ///
    /// Re-selecting the already-active seat toggles that buffer's sign
    /// instead. Selecting a different seat applies "smart balance": when
    /// exactly three other buffers hold filled values, the newly selected
    /// buffer is overwritten with their negated sum so the entry balances
    /// without further typing.
    pub fn select_player(&mut self, id: PlayerId) {
        if self.active == Some(id) {
            self.buffers[id.seat_index()].toggle_sign();
            return;
        }

        let others: Vec<i64> = self
            .buffers
            .iter()
            .enumerate()
            .filter(|(seat, buf)| *seat != id.seat_index() && !buf.is_trivial())
            .map(|(_, buf)| buf.parse())
            .collect();

        if others.len() == PLAYER_COUNT - 1 {
            let needed = -others.iter().sum::<i64>();
            debug!(player = %id, needed, "smart balance filled buffer");
            self.buffers[id.seat_index()].set_value(needed);
        }

        self.active = Some(id);
    }

    // ---- Keypad ----

    /// Append a digit to the active buffer. Silent no-op with no active seat.
    pub fn press_digit(&mut self, d: char) {
        if let Some(id) = self.active {
            self.buffers[id.seat_index()].press_digit(d);
        }
    }

    /// Cycle the active buffer's sign. Silent no-op with no active seat.
    pub fn toggle_sign(&mut self) {
        if let Some(id) = self.active {
            self.buffers[id.seat_index()].toggle_sign();
        }
    }

    /// Drop the last character of the active buffer.
    pub fn backspace(&mut self) {
        if let Some(id) = self.active {
            self.buffers[id.seat_index()].backspace();
        }
    }

    /// Empty the active buffer (keypad `C`).
    pub fn clear_active(&mut self) {
        if let Some(id) = self.active {
            self.buffers[id.seat_index()].clear();
        }
    }

    /// Empty every buffer. The active-seat pointer is untouched. Callers
    /// gate this behind a confirmation prompt when
    /// [`has_nontrivial_input`](Self::has_nontrivial_input) holds.
    pub fn clear_all(&mut self) {
        for buf in &mut self.buffers {
            buf.clear();
        }
    }

    /// Overwrite the active buffer with the negated sum of the other three
    /// parsed buffers. No-op with no active seat.
    pub fn auto_balance(&mut self) {
        let Some(id) = self.active else {
            return;
        };
        let sum_others: i64 = self
            .buffers
            .iter()
            .enumerate()
            .filter(|(seat, _)| *seat != id.seat_index())
            .map(|(_, buf)| buf.parse())
            .sum();
        self.buffers[id.seat_index()].set_value(-sum_others);
    }

    // ---- Commit gate ----

    /// Finalize the entry into a committed [`Round`].
    ///
    /// Fails with no state change unless the entry is balanced. On success
    /// every buffer is reset and the active pointer moves to `first_seat`,
    /// ready for the next round.
    pub fn finalize(&mut self, first_seat: PlayerId) -> Result<Round, EntryError> {
        if !self.is_balanced() {
            return Err(EntryError::Unbalanced {
                sum: self.balance_sum(),
            });
        }

        let mut scores = [0i64; PLAYER_COUNT];
        for (seat, buf) in self.buffers.iter().enumerate() {
            scores[seat] = buf.parse();
        }

        self.clear_all();
        self.active = Some(first_seat);
        debug!("pending entry finalized into a round");
        Ok(Round::commit_now(RoundScores::new(scores)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(index: usize) -> PlayerId {
        PlayerId::from_seat(index).unwrap()
    }

    /// Type a signed value into the given seat the way a player would:
    /// select the seat, fix the sign, then press digits.
    fn type_value(entry: &mut PendingEntry, id: PlayerId, value: i64) {
        entry.select_player(id);
        entry.clear_active();
        for d in value.unsigned_abs().to_string().chars() {
            entry.press_digit(d);
        }
        // Digits enter negative-biased; flip for positive values.
        if value > 0 {
            entry.toggle_sign();
        }
    }

    #[test]
    fn starts_idle_with_no_active_seat() {
        let entry = PendingEntry::new();
        assert_eq!(entry.state(), EntryState::Idle);
        assert_eq!(entry.active(), None);
        assert!(!entry.has_nontrivial_input());
    }

    #[test]
    fn press_digit_without_active_seat_is_a_no_op() {
        let mut entry = PendingEntry::new();
        entry.press_digit('5');
        entry.toggle_sign();
        entry.backspace();
        assert_eq!(entry.state(), EntryState::Idle);
    }

    #[test]
    fn typing_moves_to_editing() {
        let mut entry = PendingEntry::new();
        entry.select_player(seat(0));
        entry.press_digit('5');
        assert_eq!(entry.buffer(seat(0)), "-5");
        assert_eq!(entry.state(), EntryState::Editing);
    }

    #[test]
    fn reselecting_active_seat_toggles_sign() {
        let mut entry = PendingEntry::new();
        entry.select_player(seat(0));
        entry.press_digit('8');
        assert_eq!(entry.buffer(seat(0)), "-8");
        entry.select_player(seat(0));
        assert_eq!(entry.buffer(seat(0)), "8");
        entry.select_player(seat(0));
        assert_eq!(entry.buffer(seat(0)), "-8");
    }

    #[test]
    fn reselecting_empty_active_seat_cycles_bare_sign() {
        let mut entry = PendingEntry::new();
        entry.select_player(seat(1));
        entry.select_player(seat(1));
        assert_eq!(entry.buffer(seat(1)), "-");
        entry.select_player(seat(1));
        assert_eq!(entry.buffer(seat(1)), "");
    }

    #[test]
    fn smart_balance_fills_fourth_seat() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 1000);
        type_value(&mut entry, seat(1), -500);
        type_value(&mut entry, seat(2), -500);

        entry.select_player(seat(3));
        assert_eq!(entry.buffer(seat(3)), "0");
        assert!(entry.is_balanced());
    }

    #[test]
    fn smart_balance_needs_exactly_three_filled() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 1000);
        type_value(&mut entry, seat(1), -500);

        entry.select_player(seat(3));
        assert_eq!(entry.buffer(seat(3)), "");
        assert_eq!(entry.active(), Some(seat(3)));
    }

    #[test]
    fn smart_balance_ignores_bare_sign_buffers() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 800);
        type_value(&mut entry, seat(1), -800);
        entry.select_player(seat(2));
        entry.toggle_sign(); // leaves a bare "-", not a filled value

        entry.select_player(seat(3));
        assert_eq!(entry.buffer(seat(3)), "");
    }

    #[test]
    fn auto_balance_zeroes_the_entry() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 8000);
        type_value(&mut entry, seat(1), -2000);
        type_value(&mut entry, seat(2), -2000);
        entry.select_player(seat(3));
        // Smart balance already fired; overwrite and redo explicitly.
        entry.clear_active();
        entry.press_digit('1');
        entry.auto_balance();

        assert_eq!(entry.value(seat(3)), -4000);
        assert_eq!(entry.balance_sum(), 0);
    }

    #[test]
    fn auto_balance_without_active_seat_is_a_no_op() {
        let mut entry = PendingEntry::new();
        entry.auto_balance();
        assert_eq!(entry.state(), EntryState::Idle);
    }

    #[test]
    fn all_empty_entry_is_not_balanced() {
        let entry = PendingEntry::new();
        assert_eq!(entry.balance_sum(), 0);
        assert!(!entry.is_balanced());
    }

    #[test]
    fn finalize_rejects_unbalanced_entry() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 100);

        let err = entry.finalize(seat(0)).unwrap_err();
        assert_eq!(err, EntryError::Unbalanced { sum: 100 });
        // No state change on failure.
        assert_eq!(entry.buffer(seat(0)), "100");
    }

    #[test]
    fn finalize_rejects_all_empty_entry() {
        let mut entry = PendingEntry::new();
        let err = entry.finalize(seat(0)).unwrap_err();
        assert_eq!(err, EntryError::Unbalanced { sum: 0 });
    }

    #[test]
    fn finalize_produces_round_and_resets() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 8000);
        type_value(&mut entry, seat(1), -2000);
        type_value(&mut entry, seat(2), -2000);
        type_value(&mut entry, seat(3), -4000);
        assert_eq!(entry.state(), EntryState::Balanced);

        let round = entry.finalize(seat(0)).unwrap();
        assert_eq!(*round.scores.as_array(), [8000, -2000, -2000, -4000]);
        assert_eq!(entry.state(), EntryState::Idle);
        assert_eq!(entry.active(), Some(seat(0)));
    }

    #[test]
    fn finalize_parses_trivial_buffers_as_zero() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(0), 300);
        type_value(&mut entry, seat(1), -300);
        entry.select_player(seat(2));
        entry.toggle_sign(); // bare "-" parses as 0

        let round = entry.finalize(seat(0)).unwrap();
        assert_eq!(*round.scores.as_array(), [300, -300, 0, 0]);
    }

    #[test]
    fn clear_all_keeps_active_pointer() {
        let mut entry = PendingEntry::new();
        type_value(&mut entry, seat(2), 50);
        assert!(entry.has_nontrivial_input());

        entry.clear_all();
        assert_eq!(entry.state(), EntryState::Idle);
        assert_eq!(entry.active(), Some(seat(2)));
    }

    #[test]
    fn keystroke_scenarios_from_the_keypad() {
        // "-" then "5" on an empty buffer yields -5.
        let mut entry = PendingEntry::new();
        entry.select_player(seat(0));
        entry.toggle_sign();
        entry.press_digit('5');
        assert_eq!(entry.buffer(seat(0)), "-5");

        // "0" then "5": the leading zero is replaced.
        let mut entry = PendingEntry::new();
        entry.select_player(seat(0));
        entry.press_digit('0');
        entry.toggle_sign(); // to unsigned "0"
        entry.press_digit('5');
        assert_eq!(entry.buffer(seat(0)), "5");

        // "0" then "0": the second zero is ignored.
        let mut entry = PendingEntry::new();
        entry.select_player(seat(0));
        entry.press_digit('0');
        entry.toggle_sign();
        entry.press_digit('0');
        assert_eq!(entry.buffer(seat(0)), "0");
    }
}
