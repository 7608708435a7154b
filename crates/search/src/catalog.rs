//! Catalog of known spice names: the candidates for search suggestions.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl From<&str> for CatalogItem {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Source of the current catalog.
pub trait CatalogProvider: Send + Sync {
    fn items(&self) -> Vec<CatalogItem>;
}

impl<P> CatalogProvider for std::sync::Arc<P>
where
    P: CatalogProvider + ?Sized,
{
    fn items(&self) -> Vec<CatalogItem> {
        (**self).items()
    }
}

/// Built-in catalog of common spices, herbs and blends, embedded at compile
/// time from `data/spices.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

static BUILT_IN: LazyLock<Vec<CatalogItem>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/spices.json")).unwrap_or_else(|e| {
        tracing::error!("built-in spice catalog is malformed: {e}");
        Vec::new()
    })
});

impl StaticCatalog {
    pub fn as_slice(&self) -> &'static [CatalogItem] {
        &BUILT_IN
    }
}

impl CatalogProvider for StaticCatalog {
    fn items(&self) -> Vec<CatalogItem> {
        BUILT_IN.clone()
    }
}

/// Catalog backed by a plain list (custom catalogs, tests).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl<'a> FromIterator<&'a str> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(CatalogItem::from).collect())
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn items(&self) -> Vec<CatalogItem> {
        self.items.clone()
    }
}
