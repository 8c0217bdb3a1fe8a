use tracing::{info, warn};

use sifang_draw::SpinOutcome;
use sifang_entry::PendingEntry;
use sifang_export::SettlementSheet;
use sifang_ledger::Ledger;
use sifang_store::{GameSnapshot, SnapshotStore};
use sifang_types::{Mode, PlayerId, RoundId, PLAYER_COUNT};

use crate::confirm::ConfirmPrompt;
use crate::error::AppError;

/// The application core: mode, ledger, pending entry, persistence gateway.
///
/// All intents execute synchronously; the presentation layer serializes
/// them onto one logical thread. The in-memory state is the sole source of
/// truth — storage is overwritten whole after every ledger or mode change
/// and never read back mid-session.
pub struct ScoreKeeper {
    mode: Mode,
    ledger: Ledger,
    entry: PendingEntry,
    store: Box<dyn SnapshotStore>,
}

impl ScoreKeeper {
    /// Start from the stored snapshot, or from the default four-player
    /// state when nothing is stored or the record is malformed.
    pub fn load_or_default(store: Box<dyn SnapshotStore>) -> Self {
        let (mode, ledger) = match store.load() {
            Ok(Some(snapshot)) => {
                info!(mode = %snapshot.mode, rounds = snapshot.ledger.round_count(), "snapshot restored");
                (snapshot.mode, snapshot.ledger)
            }
            Ok(None) => (Mode::default(), Ledger::new()),
            Err(e) => {
                warn!(error = %e, "discarding unreadable snapshot, starting fresh");
                (Mode::default(), Ledger::new())
            }
        };

        let mut entry = PendingEntry::new();
        if !mode.is_setup() {
            entry.select_player(PlayerId::first());
        }

        Self {
            mode,
            ledger,
            entry,
            store,
        }
    }

    // ---- Accessors ----

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn entry(&self) -> &PendingEntry {
        &self.entry
    }

    // ---- Game lifecycle ----

    /// Apply setup names (blank entries keep the seat defaults) and enter
    /// game mode with the first seat active.
    pub fn start_game(&mut self, names: &[String; PLAYER_COUNT]) {
        self.ledger.rename_players(names);
        self.mode = Mode::Game;
        self.entry = PendingEntry::new();
        self.entry.select_player(PlayerId::first());
        self.persist();
    }

    /// Full game reset: wipe storage, drop all state, return to setup.
    pub fn full_reset(&mut self, confirm: &dyn ConfirmPrompt) -> bool {
        if !confirm.confirm("Completely reset the game? All scores and history will be lost.") {
            return false;
        }
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored snapshot");
        }
        self.mode = Mode::Setup;
        self.ledger = Ledger::new();
        self.entry = PendingEntry::new();
        true
    }

    /// Clear all history and zero the scores, keeping names and seats.
    pub fn clear_history(&mut self, confirm: &dyn ConfirmPrompt) -> bool {
        if !confirm.confirm("Clear all recorded rounds and reset scores? Player names are kept.") {
            return false;
        }
        self.ledger.reset_scores();
        self.entry.clear_all();
        self.persist();
        true
    }

    // ---- Round entry intents ----

    pub fn select_player(&mut self, id: PlayerId) {
        self.entry.select_player(id);
    }

    pub fn press_digit(&mut self, d: char) {
        self.entry.press_digit(d);
    }

    pub fn toggle_sign(&mut self) {
        self.entry.toggle_sign();
    }

    pub fn backspace(&mut self) {
        self.entry.backspace();
    }

    pub fn clear_active(&mut self) {
        self.entry.clear_active();
    }

    pub fn auto_balance(&mut self) {
        self.entry.auto_balance();
    }

    /// Clear every entry buffer. Prompts first when any buffer holds a
    /// non-trivial value; a "no" leaves everything untouched.
    pub fn clear_inputs(&mut self, confirm: &dyn ConfirmPrompt) -> bool {
        if self.entry.has_nontrivial_input()
            && !confirm.confirm("Discard the scores entered for this round?")
        {
            return false;
        }
        self.entry.clear_all();
        true
    }

    /// Commit the pending entry as a round: finalize, apply to the ledger,
    /// snapshot. Fails with no state change while the entry is unbalanced.
    pub fn submit_round(&mut self) -> Result<RoundId, AppError> {
        let round = self.entry.finalize(PlayerId::first())?;
        let id = round.id;
        self.ledger.apply_round(round)?;
        self.persist();
        Ok(id)
    }

    /// Delete one committed round, reversing its effect on the totals.
    /// Returns `Ok(false)` when the prompt declines.
    pub fn delete_round(
        &mut self,
        id: RoundId,
        confirm: &dyn ConfirmPrompt,
    ) -> Result<bool, AppError> {
        if !confirm.confirm("Delete this round?") {
            return Ok(false);
        }
        self.ledger.delete_round(id)?;
        self.persist();
        Ok(true)
    }

    // ---- Seats and roles ----

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> bool {
        let changed = self.ledger.rename_player(id, name);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn rename_players(&mut self, names: &[String; PLAYER_COUNT]) {
        self.ledger.rename_players(names);
        self.persist();
    }

    pub fn set_dealer(&mut self, id: PlayerId) {
        self.ledger.set_dealer(id);
        self.persist();
    }

    /// Random dealer draw. The winner is drawn first; the returned outcome
    /// also carries the cosmetic spin parameters for the presentation layer.
    pub fn draw_dealer(&mut self) -> SpinOutcome {
        let outcome = sifang_draw::spin();
        self.ledger.set_dealer(outcome.winner);
        self.persist();
        outcome
    }

    // ---- Export ----

    /// Point-in-time settlement sheet of the current ledger.
    pub fn export_sheet(&self) -> SettlementSheet {
        SettlementSheet::capture(&self.ledger)
    }

    // ---- Persistence ----

    /// Snapshot the current state. Write-after-mutation, fire-and-forget:
    /// a failed save is logged, never surfaced to the user.
    fn persist(&self) {
        let snapshot = GameSnapshot::capture(self.mode, &self.ledger);
        if let Err(e) = self.store.save(&snapshot) {
            warn!(error = %e, "snapshot save failed");
        }
    }
}
