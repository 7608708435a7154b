use serde::{Deserialize, Serialize};

use spicerack_inventory::InventoryEntry;
use spicerack_search::RankedItem;
use spicerack_shelving::{summarize, Shelf, ShelfCount, ShelfInfo};

use crate::app::services::ServedOrganizer;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddJarRequest {
    pub name: String,
}

/// Partial settings update; absent fields are left as they are.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub shelf_count: Option<i64>,
    pub ignore_duplicates: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub entries: Vec<InventoryEntry>,
    pub total: usize,
    pub distinct_total: usize,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub shelf_count: ShelfCount,
    pub ignore_duplicates: bool,
    pub search_limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ShelfView {
    pub range: String,
    pub count: u64,
    pub letters: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ShelvesResponse {
    pub shelf_count: ShelfCount,
    pub ignore_duplicates: bool,
    pub total: u64,
    pub shelves: Vec<ShelfView>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<RankedItem>,
}

pub fn inventory_to_dto(org: &ServedOrganizer) -> InventoryResponse {
    InventoryResponse {
        entries: org.entries().to_vec(),
        total: org.total(),
        distinct_total: org.distinct_total(),
    }
}

pub fn settings_to_dto(org: &ServedOrganizer) -> SettingsResponse {
    SettingsResponse {
        shelf_count: org.shelf_count(),
        ignore_duplicates: org.ignore_duplicates(),
        search_limit: org.search_limit(),
    }
}

pub fn shelves_to_dto(org: &ServedOrganizer) -> ShelvesResponse {
    let counts = org.bucket_counts();
    let shelves = spicerack_shelving::distribute(&counts, org.shelf_count());
    let info = summarize(&shelves, &counts);

    ShelvesResponse {
        shelf_count: org.shelf_count(),
        ignore_duplicates: org.ignore_duplicates(),
        total: counts.total(),
        shelves: shelves.iter().zip(info).map(shelf_to_view).collect(),
    }
}

fn shelf_to_view((shelf, info): (&Shelf, ShelfInfo)) -> ShelfView {
    ShelfView {
        range: info.range,
        count: info.count,
        letters: shelf.letters().iter().map(ToString::to_string).collect(),
    }
}
