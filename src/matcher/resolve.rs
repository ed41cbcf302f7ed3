//! Result selection: collapse winning token sets into zero, one, or a
//! bounded shortlist of catalog rows.

use crate::loader::catalog::CatalogEntry;
use crate::matcher::index::CatalogIndex;
use crate::matcher::scoring::WinningSets;
use crate::matcher::types::{MatchResult, MatchedRow, SeverityLevel, TokenSet};

/// A single row wins outright when its frequency share exceeds this.
pub const FREQUENCY_THRESHOLD: f64 = 0.5;

/// Upper bound on ambiguous shortlists.
pub const SHORTLIST_LIMIT: usize = 5;

/// Turn the winning `(key, index)` pairs into catalog rows and apply the
/// selection policy:
///
/// 1. Deduplicate winners by structural token-set equality (first kept).
/// 2. Rows = catalog entries whose `elt_inc_stem_unique` equals a winning
///    token set joined on spaces; attach `confiance` (the max score) and
///    `frequence` (row count / summed count of all matching rows).
/// 3. Perfect score → the row whose raw description has the most words;
///    else a row with `frequence` above [`FREQUENCY_THRESHOLD`] → that row;
///    else the first [`SHORTLIST_LIMIT`] rows, unranked.
///
/// First-found maxima win remaining ties. A catalog that yields no row for
/// the winning token sets degrades to `NoMatch` rather than panicking.
pub fn resolve_rows(
    catalog: &[CatalogEntry],
    winners: &WinningSets,
    index: &CatalogIndex,
    severity: SeverityLevel,
) -> MatchResult {
    let mut unique_sets: Vec<&TokenSet> = Vec::new();
    for (key, &i) in winners.keys.iter().zip(winners.indices.iter()) {
        let Some(sets) = index.get(key) else { continue };
        let Some(set) = sets.get(i) else { continue };
        if !unique_sets.contains(&set) {
            unique_sets.push(set);
        }
    }
    let answers: Vec<String> = unique_sets.iter().map(|s| s.join(" ")).collect();

    let rows: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|row| answers.iter().any(|a| *a == row.elt_inc_stem_unique))
        .collect();
    if rows.is_empty() {
        log::warn!(
            "No catalog row matches the winning token sets; catalog and index out of sync"
        );
        return MatchResult::NoMatch;
    }

    let total: u64 = rows.iter().map(|row| row.count).sum();
    let matched: Vec<MatchedRow> = rows
        .iter()
        .map(|row| MatchedRow {
            elt_id: row.elt_id.clone(),
            elt: row.elt.clone(),
            inc_id: row.inc_id.clone(),
            inc: row.inc.clone(),
            frequence: if total == 0 {
                0.0
            } else {
                row.count as f64 / total as f64
            },
            confiance: winners.score,
            inc_lvl: severity,
        })
        .collect();

    // Perfect overlap: prefer the most specific (wordiest) raw description.
    if winners.score == 1.0 {
        let mut best = 0;
        let mut best_words = rows[0].elt_inc.split_whitespace().count();
        for (i, row) in rows.iter().enumerate().skip(1) {
            let words = row.elt_inc.split_whitespace().count();
            if words > best_words {
                best = i;
                best_words = words;
            }
        }
        return MatchResult::Single(matched[best].clone());
    }

    let mut best = 0;
    let mut best_frequence = matched[0].frequence;
    for (i, row) in matched.iter().enumerate().skip(1) {
        if row.frequence > best_frequence {
            best = i;
            best_frequence = row.frequence;
        }
    }
    if best_frequence > FREQUENCY_THRESHOLD {
        return MatchResult::Single(matched[best].clone());
    }

    MatchResult::Shortlist(matched.into_iter().take(SHORTLIST_LIMIT).collect())
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
