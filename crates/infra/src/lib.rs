//! Infrastructure layer: snapshot persistence and process configuration.

pub mod config;
pub mod snapshot;

pub use config::{AppConfig, ConfigError};
pub use snapshot::{
    InMemorySnapshotStore, JsonFileSnapshotStore, Snapshot, SnapshotError, SnapshotStore,
};
