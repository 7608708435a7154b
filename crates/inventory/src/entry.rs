use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use spicerack_core::{EntryId, Entity, Letter};

/// One jar in the inventory.
///
/// Entries are immutable once created; changing a jar means removing the entry
/// and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    id: EntryId,
    name: String,
    added_at: DateTime<Utc>,
}

impl InventoryEntry {
    pub fn new(id: EntryId, name: impl Into<String>, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            added_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// The alphabet bucket this jar is shelved under.
    ///
    /// Always `Some` for entries held by an `InventoryStore`.
    pub fn bucket(&self) -> Option<Letter> {
        Letter::bucket_of(&self.name)
    }
}

impl Entity for InventoryEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
