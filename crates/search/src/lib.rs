//! Search module: typo-tolerant lookup of spice names in a catalog.

pub mod catalog;
pub mod matcher;

pub use catalog::{CatalogItem, CatalogProvider, InMemoryCatalog, StaticCatalog};
pub use matcher::{score, search, RankedItem, DEFAULT_LIMIT};
