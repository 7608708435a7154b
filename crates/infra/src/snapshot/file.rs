use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{Snapshot, SnapshotError, SnapshotStore};

/// Snapshot store backed by a single pretty-printed JSON file.
///
/// Each write goes to its own uniquely named temp file next to the target,
/// which is then renamed over it. A crash mid-save leaves the previous
/// snapshot intact, and concurrent saves never share a temp file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;

        let parent = self.parent_dir();
        fs::create_dir_all(parent)?;

        // Dropping `tmp` on any error path removes the temp file.
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            "snapshot written"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            "snapshot read"
        );
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spicerack_core::EntryId;
    use spicerack_inventory::InventoryEntry;
    use spicerack_shelving::ShelfCount;

    fn sample() -> Snapshot {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Snapshot {
            entries: vec![
                InventoryEntry::new(EntryId::new(), "Allspice", at),
                InventoryEntry::new(EntryId::new(), "Cumin", at),
            ],
            shelf_count: ShelfCount::clamped(3),
        }
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_same_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("nested/rack.json"));
        let snapshot = sample();

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));

        let leftovers: Vec<_> = fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("rack.json")]);
    }

    #[test]
    fn concurrent_saves_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("rack.json"));
        let snapshots: Vec<Snapshot> = (1..=4)
            .map(|n| Snapshot {
                entries: sample().entries,
                shelf_count: ShelfCount::clamped(n),
            })
            .collect();

        let failures: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = snapshots
                .iter()
                .map(|snapshot| {
                    let store = &store;
                    scope.spawn(move || {
                        (0..50).filter(|_| store.save(snapshot).is_err()).count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(failures, 0);
        let loaded = store.load().unwrap().unwrap();
        assert!(snapshots.contains(&loaded));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("rack.json")]);
    }

    #[test]
    fn old_files_with_derived_fields_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");
        fs::write(
            &path,
            r#"{
                "entries": [
                    {"id": "00000000-0000-0000-0000-000000000000", "name": "Basil", "added_at": "2023-01-01T00:00:00Z"}
                ],
                "shelf_count": 40,
                "counts": {"B": 1},
                "shelves": [{"range": "A-Z", "count": 1}]
            }"#,
        )
        .unwrap();

        let snapshot = JsonFileSnapshotStore::new(&path).load().unwrap().unwrap();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].name(), "Basil");
        assert_eq!(snapshot.shelf_count, ShelfCount::MAX);
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileSnapshotStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SnapshotError::Format(_)));
    }
}
