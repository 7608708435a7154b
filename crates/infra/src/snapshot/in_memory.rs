use std::sync::RwLock;

use super::{Snapshot, SnapshotError, SnapshotStore};

/// In-memory snapshot store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<Snapshot>>,
    saves: RwLock<usize>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a snapshot already present, as if saved by an earlier run.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(Some(snapshot)),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|n| *n).unwrap_or(0)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".into()))?;
        *slot = Some(snapshot.clone());
        if let Ok(mut saves) = self.saves.write() {
            *saves += 1;
        }
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let slot = self
            .inner
            .read()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".into()))?;
        Ok(slot.clone())
    }
}
