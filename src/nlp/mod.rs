//! Text normalization: stopword filtering and the canonical-token pipeline.

pub mod normalizer;
pub mod stopwords;

pub use normalizer::{AcronymDictionary, Normalizer};
pub use stopwords::StopwordSet;

use std::collections::HashSet;

/// Deduplicate tokens preserving first-occurrence order.
///
/// Used identically for query normalization and catalog index construction,
/// so both sides agree on what a canonical token sequence is.
pub fn dedup_preserving_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    tokens.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
