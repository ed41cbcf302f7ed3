//! Coarse candidate recall over the catalog index.

use std::collections::BTreeMap;

use crate::matcher::index::CatalogIndex;
use crate::matcher::types::TokenSet;

/// Return the index entries whose key token occurs at least once in the
/// query, with their full bucket. A candidate token set is recalled when ANY
/// of its member tokens appears in the query; overlap quality is decided by
/// the scorer, not here. An empty query recalls nothing.
pub fn retrieve_candidates<'a>(
    query: &[String],
    index: &'a CatalogIndex,
) -> BTreeMap<&'a str, &'a [TokenSet]> {
    let mut candidates: BTreeMap<&str, &[TokenSet]> = BTreeMap::new();
    for (token, sets) in index.iter() {
        let recall = query.iter().filter(|q| q.as_str() == token).count();
        if recall >= 1 {
            candidates.insert(token.as_str(), sets.as_slice());
        }
    }
    candidates
}

#[cfg(test)]
#[path = "tests/retrieval_tests.rs"]
mod tests;
