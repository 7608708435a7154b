//! Shelving module: splitting the alphabet across a fixed number of shelves
//! so that every shelf holds roughly the same number of jars.
//!
//! Everything here is a pure function of per-letter counts and a shelf count.
//! Results are rebuilt on every request and never cached.

pub mod count;
pub mod distribute;
pub mod partition;
pub mod shelf;

pub use count::{ShelfCount, MAX_SHELVES};
pub use distribute::distribute;
pub use partition::linear_partition;
pub use shelf::{summarize, LetterRange, Shelf, ShelfInfo};
