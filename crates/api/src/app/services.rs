//! Shared state behind the HTTP handlers and the autosave worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard, Notify};

use spicerack_infra::{AppConfig, SnapshotError, SnapshotStore};
use spicerack_organizer::Organizer;
use spicerack_search::CatalogProvider;

/// The organizer as served over HTTP: catalog chosen at startup.
pub type ServedOrganizer = Organizer<Arc<dyn CatalogProvider>>;

pub struct AppServices {
    organizer: Mutex<ServedOrganizer>,
    store: Arc<dyn SnapshotStore>,
    // Serializes save and load so the file on disk and `mark_saved` always
    // describe the same revision.
    persist_lock: Mutex<()>,
    changed: Notify,
    shutdown: Notify,
    autosave_debounce: Duration,
}

impl AppServices {
    pub fn new(
        organizer: ServedOrganizer,
        store: Arc<dyn SnapshotStore>,
        autosave_debounce: Duration,
    ) -> Self {
        Self {
            organizer: Mutex::new(organizer),
            store,
            persist_lock: Mutex::new(()),
            changed: Notify::new(),
            shutdown: Notify::new(),
            autosave_debounce,
        }
    }

    pub async fn organizer(&self) -> MutexGuard<'_, ServedOrganizer> {
        self.organizer.lock().await
    }

    /// Signal that state changed and should be persisted soon.
    pub fn notify_changed(&self) {
        self.changed.notify_one();
    }

    /// Ask the autosave worker to flush and stop.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Persist the current state now. Saves take turns; the organizer lock
    /// is not held while the store writes.
    pub async fn save_now(&self) -> Result<usize, SnapshotError> {
        let _persisting = self.persist_lock.lock().await;
        let (snapshot, revision) = self.organizer().await.snapshot_at_revision();
        let entries = snapshot.entries.len();

        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save(&snapshot))
            .await
            .map_err(|e| SnapshotError::Unavailable(e.to_string()))??;

        self.organizer().await.mark_saved(revision);
        tracing::info!(entries, revision, "snapshot saved");
        Ok(entries)
    }

    /// Replace the current state with the stored snapshot, if there is one.
    pub async fn load_now(&self) -> Result<bool, SnapshotError> {
        let _persisting = self.persist_lock.lock().await;
        let store = self.store.clone();
        let loaded = tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| SnapshotError::Unavailable(e.to_string()))??;

        match loaded {
            Some(snapshot) => {
                self.organizer().await.restore(snapshot);
                Ok(true)
            }
            None => {
                tracing::info!("no snapshot to load");
                Ok(false)
            }
        }
    }
}

/// Build services from configuration, restoring any saved snapshot.
pub async fn build_services(
    config: &AppConfig,
    catalog: Arc<dyn CatalogProvider>,
    store: Arc<dyn SnapshotStore>,
) -> Result<Arc<AppServices>, SnapshotError> {
    let organizer = Organizer::new(catalog)
        .with_shelf_count(config.shelf_count.get() as i64)
        .with_ignore_duplicates(config.ignore_duplicates)
        .with_search_limit(config.search_limit);

    let services = Arc::new(AppServices::new(organizer, store, config.autosave_debounce));
    services.load_now().await?;
    Ok(services)
}

/// Background worker that saves once mutations have been quiet for the
/// debounce window.
pub struct AutosaveWorker {
    services: Arc<AppServices>,
}

impl AutosaveWorker {
    pub fn new(services: Arc<AppServices>) -> Self {
        Self { services }
    }

    /// Spawn the worker. It exits after `AppServices::shutdown`, flushing
    /// pending changes first.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let services = self.services;

        tokio::spawn(async move {
            tracing::debug!(debounce_ms = services.autosave_debounce.as_millis() as u64, "autosave worker started");

            loop {
                tokio::select! {
                    _ = services.shutdown.notified() => break,
                    _ = services.changed.notified() => {}
                }

                // Wait until no change arrives for a whole window.
                let stopping = loop {
                    tokio::select! {
                        _ = services.shutdown.notified() => break true,
                        _ = services.changed.notified() => continue,
                        _ = tokio::time::sleep(services.autosave_debounce) => break false,
                    }
                };

                Self::flush(&services).await;
                if stopping {
                    tracing::debug!("autosave worker stopping");
                    return;
                }
            }

            Self::flush(&services).await;
            tracing::debug!("autosave worker stopping");
        })
    }

    // A failed save re-arms the worker for another quiet window.
    async fn flush(services: &AppServices) {
        if !services.organizer().await.is_dirty() {
            return;
        }
        if let Err(e) = services.save_now().await {
            tracing::warn!(error = %e, "autosave failed; will retry");
            services.notify_changed();
        }
    }
}
