use spicerack_core::{BucketCounts, DomainError, DomainResult, Entity, EntryId};
use spicerack_infra::{Snapshot, SnapshotError, SnapshotStore};
use spicerack_inventory::{InventoryEntry, InventoryStore, NameNormalizer, TitleCase};
use spicerack_search::{CatalogItem, CatalogProvider, RankedItem, StaticCatalog, DEFAULT_LIMIT};
use spicerack_shelving::{distribute, summarize, Shelf, ShelfCount, ShelfInfo};

/// Shelf count a fresh organizer starts with.
pub const DEFAULT_SHELF_COUNT: i64 = 4;

/// One user's spice rack: jars, shelf settings and catalog lookup.
///
/// Every mutation bumps `revision`. `is_dirty` compares it with the revision
/// last written to (or read from) a snapshot store.
#[derive(Debug)]
pub struct Organizer<C = StaticCatalog, N = TitleCase> {
    store: InventoryStore<N>,
    catalog: C,
    shelf_count: ShelfCount,
    ignore_duplicates: bool,
    search_limit: usize,
    revision: u64,
    saved_revision: u64,
}

impl Organizer<StaticCatalog, TitleCase> {
    /// Organizer over the built-in catalog with default settings.
    pub fn builtin() -> Self {
        Self::new(StaticCatalog)
    }
}

impl Default for Organizer<StaticCatalog, TitleCase> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<C: CatalogProvider> Organizer<C, TitleCase> {
    pub fn new(catalog: C) -> Self {
        Self::with_store(catalog, InventoryStore::new())
    }
}

impl<C, N> Organizer<C, N>
where
    C: CatalogProvider,
    N: NameNormalizer + Clone,
{
    pub fn with_store(catalog: C, store: InventoryStore<N>) -> Self {
        Self {
            store,
            catalog,
            shelf_count: ShelfCount::clamped(DEFAULT_SHELF_COUNT),
            ignore_duplicates: false,
            search_limit: DEFAULT_LIMIT,
            revision: 0,
            saved_revision: 0,
        }
    }

    pub fn with_shelf_count(mut self, requested: i64) -> Self {
        self.shelf_count = ShelfCount::clamped(requested);
        self
    }

    pub fn with_ignore_duplicates(mut self, ignore: bool) -> Self {
        self.ignore_duplicates = ignore;
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    // ---- inventory ----

    /// Add a jar by (unnormalized) name.
    pub fn add(&mut self, name: &str) -> DomainResult<InventoryEntry> {
        let entry = self.store.add(name)?;
        self.touch();
        tracing::info!(id = %entry.id(), name = entry.name(), total = self.total(), "jar added");
        Ok(entry)
    }

    /// Remove a jar. `false` (and no change) when the id is unknown.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.touch();
            tracing::info!(%id, total = self.total(), "jar removed");
        }
        removed
    }

    /// Like [`Organizer::remove`], reporting an unknown id as `NotFound`.
    pub fn remove_existing(&mut self, id: &EntryId) -> DomainResult<()> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(DomainError::not_found())
        }
    }

    /// Remove every jar. Settings are kept.
    pub fn reset(&mut self) {
        self.store.reset();
        self.touch();
        tracing::info!("inventory reset");
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        self.store.entries()
    }

    pub fn entry(&self, id: &EntryId) -> DomainResult<&InventoryEntry> {
        self.store.get(id).ok_or_else(DomainError::not_found)
    }

    /// Jars owned, duplicates included.
    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Jars with distinct names.
    pub fn distinct_total(&self) -> usize {
        self.store.distinct_len()
    }

    // ---- settings ----

    pub fn shelf_count(&self) -> ShelfCount {
        self.shelf_count
    }

    /// Change the number of shelves. Out-of-range values are clamped; the
    /// effective count is returned.
    pub fn set_shelf_count(&mut self, requested: i64) -> ShelfCount {
        let effective = ShelfCount::clamped(requested);
        if effective != self.shelf_count {
            self.shelf_count = effective;
            self.touch();
            tracing::info!(requested, shelves = %effective, "shelf count changed");
        }
        effective
    }

    pub fn ignore_duplicates(&self) -> bool {
        self.ignore_duplicates
    }

    pub fn set_ignore_duplicates(&mut self, ignore: bool) {
        if ignore != self.ignore_duplicates {
            self.ignore_duplicates = ignore;
            tracing::info!(ignore, "duplicate handling changed");
        }
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    // ---- shelving ----

    /// Counts used for shelving, honoring the duplicate flag.
    pub fn bucket_counts(&self) -> BucketCounts {
        self.store.effective_counts(self.ignore_duplicates)
    }

    pub fn shelves(&self) -> Vec<Shelf> {
        distribute(&self.bucket_counts(), self.shelf_count)
    }

    /// Shelf labels with the number of jars on each.
    pub fn shelf_info(&self) -> Vec<ShelfInfo> {
        let counts = self.bucket_counts();
        summarize(&distribute(&counts, self.shelf_count), &counts)
    }

    // ---- catalog ----

    pub fn catalog(&self) -> Vec<CatalogItem> {
        self.catalog.items()
    }

    /// Rank catalog items against `query`, capped at the configured limit.
    pub fn search(&self, query: &str) -> Vec<RankedItem> {
        self.search_with_limit(query, self.search_limit)
    }

    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<RankedItem> {
        spicerack_search::search(query, &self.catalog.items(), limit)
    }

    // ---- persistence ----

    /// Source data only; counts are never part of a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.store.entries().to_vec(),
            shelf_count: self.shelf_count,
        }
    }

    /// Replace the inventory and shelf count with a snapshot's contents.
    ///
    /// Entries that no longer have a bucket letter, or repeat an id, are
    /// dropped. The result counts as saved.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let normalizer = self.store.normalizer().clone();
        self.store = InventoryStore::from_entries(snapshot.entries, normalizer);
        self.shelf_count = snapshot.shelf_count;
        self.touch();
        self.saved_revision = self.revision;
        tracing::info!(entries = self.total(), shelves = %self.shelf_count, "snapshot restored");
    }

    /// Write a snapshot of the current state.
    pub fn save(&mut self, store: &dyn SnapshotStore) -> Result<(), SnapshotError> {
        let (snapshot, revision) = self.snapshot_at_revision();
        store.save(&snapshot)?;
        self.mark_saved(revision);
        tracing::info!(entries = snapshot.entries.len(), revision, "snapshot saved");
        Ok(())
    }

    /// Restore from `store` if it holds a snapshot. Returns whether one was
    /// found; the current state is left alone otherwise.
    pub fn load(&mut self, store: &dyn SnapshotStore) -> Result<bool, SnapshotError> {
        match store.load()? {
            Some(snapshot) => {
                self.restore(snapshot);
                Ok(true)
            }
            None => {
                tracing::info!("no snapshot to load");
                Ok(false)
            }
        }
    }

    /// Snapshot together with the revision it reflects, for callers that
    /// write it out without holding the organizer.
    pub fn snapshot_at_revision(&self) -> (Snapshot, u64) {
        (self.snapshot(), self.revision)
    }

    /// Record that the state at `revision` has been persisted.
    pub fn mark_saved(&mut self, revision: u64) {
        self.saved_revision = revision.min(self.revision);
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether there are changes not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spicerack_core::Letter;
    use spicerack_infra::InMemorySnapshotStore;
    use spicerack_search::InMemoryCatalog;

    fn organizer() -> Organizer<InMemoryCatalog> {
        Organizer::new(InMemoryCatalog::from_iter([
            "Basil",
            "Bay Leaves",
            "Cinnamon",
            "Cardamom",
            "Cumin",
            "Oregano",
            "Paprika",
        ]))
    }

    fn stocked() -> Organizer<InMemoryCatalog> {
        let mut org = organizer();
        for name in ["Basil", "Bay Leaves", "Cinnamon", "Cardamom", "Cumin", "Paprika"] {
            org.add(name).unwrap();
        }
        org
    }

    fn labels(info: &[ShelfInfo]) -> Vec<&str> {
        info.iter().map(|s| s.range.as_str()).collect()
    }

    #[test]
    fn end_to_end_three_shelves() {
        let mut org = stocked();
        org.set_shelf_count(3);

        let shelves = org.shelves();
        assert_eq!(shelves.len(), 3);

        let mut letters: Vec<Letter> = shelves.iter().flat_map(|s| s.letters().to_vec()).collect();
        letters.sort();
        let expected: Vec<Letter> = ['B', 'C', 'P'].into_iter().filter_map(Letter::from_char).collect();
        assert_eq!(letters, expected);

        let info = org.shelf_info();
        assert_eq!(labels(&info), vec!["A-B", "C", "D-Z"]);
        assert_eq!(info.iter().map(|s| s.count).sum::<u64>(), 6);
    }

    #[test]
    fn add_normalizes_and_rejects_blank_names() {
        let mut org = organizer();
        let entry = org.add("  smoked   paprika ").unwrap();
        assert_eq!(entry.name(), "Smoked Paprika");

        let err = org.add("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));
        assert_eq!(org.total(), 1);
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut org = stocked();
        let revision = org.revision();

        assert!(!org.remove(&EntryId::new()));
        assert_eq!(org.total(), 6);
        assert_eq!(org.revision(), revision);
        assert!(matches!(org.remove_existing(&EntryId::new()), Err(DomainError::NotFound)));
    }

    #[test]
    fn remove_updates_counts() {
        let mut org = stocked();
        let paprika = *org.entries().last().unwrap().id();

        assert!(org.remove(&paprika));
        assert_eq!(org.total(), 5);
        assert_eq!(org.bucket_counts().get(Letter::from_char('P').unwrap()), 0);
        assert!(org.entry(&paprika).is_err());
    }

    #[test]
    fn shelf_count_is_clamped() {
        let mut org = stocked();
        assert_eq!(org.set_shelf_count(0).get(), 1);
        assert_eq!(org.set_shelf_count(-4).get(), 1);
        assert_eq!(labels(&org.shelf_info()), vec!["A-Z"]);
        assert_eq!(org.set_shelf_count(1000).get(), 26);
        assert_eq!(org.shelves().len(), 26);
    }

    #[test]
    fn ignoring_duplicates_changes_counts_not_inventory() {
        let mut org = organizer();
        org.add("Cumin").unwrap();
        org.add("cumin").unwrap();
        org.add("Basil").unwrap();

        assert_eq!(org.bucket_counts().total(), 3);
        org.set_ignore_duplicates(true);
        assert_eq!(org.bucket_counts().total(), 2);
        assert_eq!(org.total(), 3);
        assert_eq!(org.distinct_total(), 2);
    }

    #[test]
    fn reset_keeps_settings() {
        let mut org = stocked().with_ignore_duplicates(true);
        org.set_shelf_count(5);
        org.reset();

        assert_eq!(org.total(), 0);
        assert_eq!(org.shelf_count().get(), 5);
        assert!(org.ignore_duplicates());
        assert_eq!(org.shelf_info().len(), 5);
        assert!(org.shelf_info().iter().all(|s| s.count == 0));
    }

    #[test]
    fn search_uses_catalog_and_limit() {
        let org = organizer().with_search_limit(1);
        let hits = org.search("c");
        assert_eq!(hits.len(), 1);

        let hits = org.search_with_limit("orn", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.name, "Oregano");

        assert!(org.search("").is_empty());
        assert_eq!(org.catalog().len(), 7);
    }

    #[test]
    fn save_and_load_round_trip_through_store() {
        let store = InMemorySnapshotStore::new();
        let mut org = stocked();
        org.set_shelf_count(3);
        assert!(org.is_dirty());

        org.save(&store).unwrap();
        assert!(!org.is_dirty());

        let mut fresh = organizer();
        assert!(fresh.load(&store).unwrap());
        assert!(!fresh.is_dirty());
        assert_eq!(fresh.entries(), org.entries());
        assert_eq!(fresh.shelf_count().get(), 3);
        assert_eq!(fresh.shelf_info(), org.shelf_info());
    }

    #[test]
    fn load_from_empty_store_keeps_state() {
        let store = InMemorySnapshotStore::new();
        let mut org = stocked();

        assert!(!org.load(&store).unwrap());
        assert_eq!(org.total(), 6);
    }

    #[test]
    fn restore_drops_invalid_entries() {
        use chrono::Utc;

        let good = InventoryEntry::new(EntryId::new(), "Basil", Utc::now());
        let bad = InventoryEntry::new(EntryId::new(), "123", Utc::now());
        let dup = good.clone();

        let mut org = organizer();
        org.restore(Snapshot {
            entries: vec![good, bad, dup],
            shelf_count: ShelfCount::clamped(2),
        });

        assert_eq!(org.total(), 1);
        assert_eq!(org.bucket_counts().total(), 1);
    }

    #[test]
    fn mutation_after_snapshot_stays_dirty() {
        let mut org = stocked();
        let (_, revision) = org.snapshot_at_revision();
        org.add("Sumac").unwrap();
        org.mark_saved(revision);
        assert!(org.is_dirty());
    }

    #[test]
    fn projections_are_idempotent() {
        let org = stocked();
        assert_eq!(org.shelf_info(), org.shelf_info());
        assert_eq!(org.search("cin"), org.search("cin"));
    }
}
