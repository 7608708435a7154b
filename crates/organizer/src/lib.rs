//! Organizer: the single entry point the HTTP layer talks to.
//!
//! Composes the inventory store, the shelf distribution and the catalog
//! search. Holds no derived state of its own: counts and shelves are computed
//! from the current entries on every call.

pub mod organizer;

pub use organizer::{Organizer, DEFAULT_SHELF_COUNT};
