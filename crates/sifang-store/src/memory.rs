use std::sync::RwLock;

use crate::error::StoreResult;
use crate::snapshot::GameSnapshot;
use crate::traits::SnapshotStore;

/// In-memory snapshot store for tests and embedding.
///
/// The snapshot is held behind a `RwLock` and cloned on load/save.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<GameSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves that would survive a reload (0 or 1).
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").is_none()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> StoreResult<Option<GameSnapshot>> {
        Ok(self.inner.read().expect("lock poisoned").clone())
    }

    fn save(&self, snapshot: &GameSnapshot) -> StoreResult<()> {
        *self.inner.write().expect("lock poisoned") = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.inner.write().expect("lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sifang_ledger::Ledger;
    use sifang_types::Mode;

    use super::*;

    #[test]
    fn load_before_save_is_none() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = InMemorySnapshotStore::new();
        let snapshot = GameSnapshot::capture(Mode::Game, &Ledger::new());
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let store = InMemorySnapshotStore::new();
        store
            .save(&GameSnapshot::capture(Mode::Setup, &Ledger::new()))
            .unwrap();
        store
            .save(&GameSnapshot::capture(Mode::Game, &Ledger::new()))
            .unwrap();
        assert_eq!(store.load().unwrap().unwrap().mode, Mode::Game);
    }

    #[test]
    fn clear_removes_snapshot() {
        let store = InMemorySnapshotStore::new();
        store
            .save(&GameSnapshot::capture(Mode::Game, &Ledger::new()))
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
