//! Match engine: owns the catalog, its index, and the normalizer.
//!
//! Constructed once at startup and passed by reference into every classify
//! call; nothing is mutated afterward, so one engine can be shared across
//! concurrent query evaluations without locking.

use crate::loader::catalog::CatalogEntry;
use crate::matcher::index::CatalogIndex;
use crate::matcher::resolve::resolve_rows;
use crate::matcher::retrieval::retrieve_candidates;
use crate::matcher::scoring::best_matching_score;
use crate::matcher::severity::severity_tag;
use crate::matcher::types::MatchResult;
use crate::nlp::{AcronymDictionary, Normalizer};

pub struct MatchEngine {
    catalog: Vec<CatalogEntry>,
    index: CatalogIndex,
    normalizer: Normalizer,
}

impl MatchEngine {
    /// Build the index from `catalog` and a normalizer with the default
    /// stopword set.
    pub fn new(catalog: Vec<CatalogEntry>, acronyms: AcronymDictionary) -> Self {
        Self::with_normalizer(catalog, Normalizer::new(acronyms))
    }

    pub fn with_normalizer(catalog: Vec<CatalogEntry>, normalizer: Normalizer) -> Self {
        let index = CatalogIndex::build(&catalog);
        MatchEngine {
            catalog,
            index,
            normalizer,
        }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Map a raw incident description to a catalog row, a shortlist, or no
    /// match. Never panics: empty or fully-filtered input degrades to
    /// `NoMatch`.
    pub fn classify(&self, text: &str) -> MatchResult {
        let tokens = self.normalizer.normalize(text);
        let severity = severity_tag(&tokens);

        let candidates = retrieve_candidates(&tokens, &self.index);
        log::debug!(
            "classify: {} query tokens, {} candidate keys, severity {}",
            tokens.len(),
            candidates.len(),
            severity
        );
        if candidates.is_empty() {
            return MatchResult::NoMatch;
        }

        let winners = best_matching_score(&tokens, &candidates);
        if winners.is_empty() || winners.score <= 0.0 {
            log::debug!("classify: best score below acceptance threshold");
            return MatchResult::NoMatch;
        }

        let result = resolve_rows(&self.catalog, &winners, &self.index, severity);
        log::info!(
            "classify: score {:.3}, {} winning pairs, outcome {}",
            winners.score,
            winners.keys.len(),
            result.kind()
        );
        result
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
