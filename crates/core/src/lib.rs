//! `spicerack-core`: domain building blocks shared by every spicerack crate.
//!
//! This crate contains **pure domain** primitives (no IO, no infrastructure).

pub mod bucket;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use bucket::{BucketCounts, Letter, ALPHABET_LEN};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntryId;
pub use value_object::ValueObject;
