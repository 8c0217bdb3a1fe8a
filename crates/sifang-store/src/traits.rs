use crate::error::StoreResult;
use crate::snapshot::GameSnapshot;

/// Persistence gateway boundary.
///
/// All implementations must satisfy these invariants:
/// - `save` replaces the whole stored record; there is no partial update.
/// - `load` returns `Ok(None)` when nothing has ever been saved.
/// - A record that exists but cannot be decoded is an error, not `None`;
///   the caller decides whether to discard it.
/// - The store never interprets the snapshot beyond (de)serialization.
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot, if any.
    fn load(&self) -> StoreResult<Option<GameSnapshot>>;

    /// Overwrite the stored snapshot with the given state.
    fn save(&self, snapshot: &GameSnapshot) -> StoreResult<()>;

    /// Remove the stored snapshot entirely (full game reset).
    fn clear(&self) -> StoreResult<()>;
}
