//! Inventory module: the jars a user owns.
//!
//! This crate contains the inventory store and the name normalization applied
//! to every added jar, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod entry;
pub mod normalize;
pub mod store;

pub use entry::InventoryEntry;
pub use normalize::{NameNormalizer, TitleCase};
pub use store::InventoryStore;
