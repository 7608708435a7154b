use std::collections::HashSet;

use chrono::{DateTime, Utc};

use spicerack_core::{BucketCounts, DomainError, DomainResult, EntryId, Entity, Letter};

use crate::entry::InventoryEntry;
use crate::normalize::{NameNormalizer, TitleCase};

/// The jars owned by one session, in the order they were added.
///
/// Per-letter counts and totals are always derived from the entry list on
/// demand; the store keeps no separate counters that could drift from it.
#[derive(Debug, Clone)]
pub struct InventoryStore<N = TitleCase> {
    entries: Vec<InventoryEntry>,
    normalizer: N,
}

impl InventoryStore<TitleCase> {
    pub fn new() -> Self {
        Self::with_normalizer(TitleCase::default())
    }
}

impl Default for InventoryStore<TitleCase> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NameNormalizer> InventoryStore<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            entries: Vec::new(),
            normalizer,
        }
    }

    /// Rebuild a store from previously persisted entries.
    ///
    /// Entries whose name has no bucket letter and entries repeating an
    /// earlier id are dropped. Names are kept as stored.
    pub fn from_entries(entries: impl IntoIterator<Item = InventoryEntry>, normalizer: N) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if entry.bucket().is_none() {
                tracing::warn!(id = %entry.id(), name = entry.name(), "dropping entry without a bucket letter");
                continue;
            }
            if !seen.insert(*entry.id()) {
                tracing::warn!(id = %entry.id(), "dropping entry with duplicate id");
                continue;
            }
            kept.push(entry);
        }

        Self {
            entries: kept,
            normalizer,
        }
    }

    /// Add a jar now. See [`InventoryStore::add_at`].
    pub fn add(&mut self, name: &str) -> DomainResult<InventoryEntry> {
        self.add_at(name, Utc::now())
    }

    /// Normalize `name` and append a new entry with a fresh id.
    ///
    /// Fails with `InvalidName` when nothing usable is left after
    /// normalization, or when the name has no letter to be shelved under.
    pub fn add_at(&mut self, name: &str, added_at: DateTime<Utc>) -> DomainResult<InventoryEntry> {
        let normalized = self.normalizer.normalize(name);
        if normalized.trim().is_empty() {
            return Err(DomainError::invalid_name("name cannot be empty"));
        }
        if Letter::bucket_of(&normalized).is_none() {
            return Err(DomainError::invalid_name(format!(
                "'{normalized}' contains no letter to shelve it under"
            )));
        }

        let entry = InventoryEntry::new(EntryId::new(), normalized, added_at);
        self.entries.push(entry.clone());

        tracing::debug!(id = %entry.id(), name = entry.name(), total = self.entries.len(), "entry added");
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns `false` (and changes nothing) if
    /// there is no such entry.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(pos) => {
                let removed = self.entries.remove(pos);
                        tracing::debug!(id = %id, name = removed.name(), total = self.entries.len(), "entry removed");
                true
            }
            None => false,
        }
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        tracing::debug!("inventory reset");
    }

    /// Per-letter counts used for shelving.
    ///
    /// With `ignore_duplicates`, each distinct name (case-insensitively)
    /// counts once no matter how many jars of it exist. The inventory itself
    /// is untouched either way.
    pub fn effective_counts(&self, ignore_duplicates: bool) -> BucketCounts {
        if !ignore_duplicates {
            return self.counts();
        }

        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| seen.insert(e.name().to_lowercase()))
            .filter_map(InventoryEntry::bucket)
            .collect()
    }

    /// Per-letter counts over every jar.
    pub fn counts(&self) -> BucketCounts {
        self.entries.iter().filter_map(InventoryEntry::bucket).collect()
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Total number of jars.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct names (case-insensitive).
    pub fn distinct_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.name().to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}
