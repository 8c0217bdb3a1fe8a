/// Synchronous yes/no boundary for destructive operations.
///
/// The core asks before clearing non-trivial pending input, deleting a
/// round, clearing all history, or fully resetting the game. A `false`
/// answer makes the operation a full no-op.
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers yes to everything. For unattended use and tests.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Answers no to everything. For tests of the no-op path.
pub struct NeverConfirm;

impl ConfirmPrompt for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
