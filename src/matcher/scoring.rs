//! Overlap scoring over recalled candidates.

use std::collections::BTreeMap;

use crate::matcher::types::TokenSet;

/// Best scores below this are reported as no match. Fixed by domain
/// calibration; do not change without confirmation.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.4;

/// The maximal-scoring candidates, as parallel `(key, index)` pairs into the
/// candidate buckets. Ties are preserved, not broken: downstream
/// disambiguation uses row frequency, not an arbitrary pick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WinningSets {
    pub keys: Vec<String>,
    pub indices: Vec<usize>,
    pub score: f64,
}

impl WinningSets {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Fraction of `token_set`'s tokens also present in the query. Always in
/// `[0, 1]`.
pub fn overlap_score(query: &[String], token_set: &TokenSet) -> f64 {
    if token_set.is_empty() {
        return 0.0;
    }
    let matches = query.iter().filter(|q| token_set.contains(q)).count();
    matches as f64 / token_set.len() as f64
}

/// Score every candidate token set (every key, every set under it, duplicates
/// included) and keep the running maximum: a strictly greater score resets
/// the winner list, an equal score appends to it. A final maximum below
/// [`ACCEPTANCE_THRESHOLD`] yields empty winners with score 0.
pub fn best_matching_score(
    query: &[String],
    candidates: &BTreeMap<&str, &[TokenSet]>,
) -> WinningSets {
    let mut max_score = 0.0_f64;
    let mut keys: Vec<String> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();

    for (key, sets) in candidates {
        for (i, set) in sets.iter().enumerate() {
            let score = overlap_score(query, set);
            if score > max_score {
                max_score = score;
                keys = vec![key.to_string()];
                indices = vec![i];
            } else if score == max_score {
                keys.push(key.to_string());
                indices.push(i);
            }
        }
    }

    if max_score < ACCEPTANCE_THRESHOLD {
        return WinningSets::default();
    }
    WinningSets {
        keys,
        indices,
        score: max_score,
    }
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
