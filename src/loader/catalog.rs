//! Defect catalog loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::nlp::dedup_preserving_order;
use crate::types::{LoadError, LoadResult};

/// One row of the defect catalog, immutable after load.
///
/// `elt_inc` holds the canonical token string produced upstream by the same
/// normalization rules applied to queries; `elt_inc_stem_unique` is its
/// deduplicated form, used as the dedup key when reconstructing rows from
/// winning token sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub elt_id: String,
    pub elt: String,
    pub inc_id: String,
    pub inc: String,
    pub count: u64,
    pub elt_inc: String,
    pub elt_inc_stem_unique: String,
}

impl CatalogEntry {
    /// Ordered, deduplicated tokens of the canonical description.
    pub fn token_set(&self) -> Vec<String> {
        dedup_preserving_order(
            self.elt_inc
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Load the catalog from a headered CSV file.
///
/// A row with an empty `elt_inc` is a data-quality fault and is rejected
/// here so the matching core can assume every row carries tokens.
pub fn load_catalog(path: &Path) -> LoadResult<Vec<CatalogEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut entries: Vec<CatalogEntry> = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let entry: CatalogEntry = record?;
        if entry.elt_inc.trim().is_empty() {
            return Err(LoadError::MissingField(format!(
                "elt_inc on row {}",
                row + 1
            )));
        }
        entries.push(entry);
    }

    log::info!(
        "Loaded {} catalog rows from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
