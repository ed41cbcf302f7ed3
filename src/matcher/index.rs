//! Reverse token index (knowledge graph) over the defect catalog.

use std::collections::BTreeMap;

use crate::loader::catalog::CatalogEntry;
use crate::matcher::types::TokenSet;

/// Token → every token set containing it, in catalog order. A token set
/// appears under each of its tokens, and appears twice under the same key
/// when built from duplicate rows. Built once, read-only afterward; rebuilt
/// from scratch whenever the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogIndex {
    buckets: BTreeMap<String, Vec<TokenSet>>,
}

impl CatalogIndex {
    /// One pass over the catalog. `elt_inc` is assumed already canonical;
    /// no normalization is re-applied here.
    pub fn build(catalog: &[CatalogEntry]) -> Self {
        let mut buckets: BTreeMap<String, Vec<TokenSet>> = BTreeMap::new();
        for entry in catalog {
            let tokens = entry.token_set();
            for token in &tokens {
                buckets
                    .entry(token.clone())
                    .or_default()
                    .push(tokens.clone());
            }
        }
        log::debug!(
            "Catalog index built: {} distinct tokens over {} rows",
            buckets.len(),
            catalog.len()
        );
        CatalogIndex { buckets }
    }

    pub fn get(&self, token: &str) -> Option<&[TokenSet]> {
        self.buckets.get(token).map(Vec::as_slice)
    }

    /// Iterate buckets in key order, for deterministic tie resolution
    /// downstream.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<TokenSet>)> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
