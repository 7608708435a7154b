//! Snapshot persistence.
//!
//! A snapshot holds only source data: the inventory entries and the chosen
//! shelf count. Bucket counts and shelf layouts are derived and always
//! recomputed after a load.

mod file;
mod in_memory;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spicerack_inventory::InventoryEntry;
use spicerack_shelving::ShelfCount;

pub use file::JsonFileSnapshotStore;
pub use in_memory::InMemorySnapshotStore;

/// Persisted organizer state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub entries: Vec<InventoryEntry>,
    #[serde(default)]
    pub shelf_count: ShelfCount,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid json: {0}")]
    Format(#[from] serde_json::Error),

    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere a snapshot can be written to and read back from.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        (**self).save(snapshot)
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        (**self).load()
    }
}
