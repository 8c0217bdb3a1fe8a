use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::GameSnapshot;
use crate::traits::SnapshotStore;

/// JSON file snapshot store.
///
/// The whole record is rewritten on every save: serialize to a sibling temp
/// file, then rename over the target so a crash mid-write never leaves a
/// truncated snapshot behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<GameSnapshot>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let snapshot = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &GameSnapshot) -> StoreResult<()> {
        let encoded = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.temp_path();
        fs::write(&tmp, &encoded)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = encoded.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
