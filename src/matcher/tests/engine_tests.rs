use super::*;

use crate::loader::catalog::CatalogEntry;
use crate::matcher::types::{MatchResult, SeverityLevel};
use crate::nlp::{AcronymDictionary, Normalizer};

/// Catalog entries are canonicalized with the same normalizer used for
/// queries, mirroring the upstream catalog preparation.
fn entry_from(
    normalizer: &Normalizer,
    elt_id: &str,
    count: u64,
    description: &str,
) -> CatalogEntry {
    let tokens = normalizer.normalize(description);
    let canonical = tokens.join(" ");
    CatalogEntry {
        elt_id: elt_id.to_string(),
        elt: format!("element {elt_id}"),
        inc_id: format!("I-{elt_id}"),
        inc: description.to_string(),
        count,
        elt_inc: canonical.clone(),
        elt_inc_stem_unique: canonical,
    }
}

fn fixture_engine() -> MatchEngine {
    let acronyms = AcronymDictionary::new();
    let builder = Normalizer::new(acronyms.clone());
    let catalog = vec![
        entry_from(&builder, "E1", 10, "moteur bloqué arrêt"),
        entry_from(&builder, "E2", 4, "capteur température défaillant"),
        entry_from(&builder, "E3", 2, "courroie ventilateur cassée"),
    ];
    MatchEngine::new(catalog, acronyms)
}

#[test]
fn test_classify_reflexive_on_catalog_description() {
    let engine = fixture_engine();
    let result = engine.classify("moteur bloqué arrêt");

    match result {
        MatchResult::Single(row) => {
            assert_eq!(row.elt_id, "E1");
            assert_eq!(row.confiance, 1.0);
            assert_eq!(row.frequence, 1.0);
        }
        other => panic!("Expected Single, got {}", other.kind()),
    }
}

#[test]
fn test_classify_partial_overlap_single_row() {
    let engine = fixture_engine();
    // Stopwords drop, two of the row's three tokens remain: score 2/3.
    let result = engine.classify("le moteur est bloqué");

    match result {
        MatchResult::Single(row) => {
            assert_eq!(row.elt_id, "E1");
            assert!((row.confiance - 2.0 / 3.0).abs() < 1e-9);
            assert_eq!(row.frequence, 1.0);
            assert_eq!(row.inc_lvl, SeverityLevel::NotFound);
        }
        other => panic!("Expected Single, got {}", other.kind()),
    }
}

#[test]
fn test_classify_attaches_severity_from_query() {
    let engine = fixture_engine();
    let result = engine.classify("moteur bloqué v2");

    match result {
        MatchResult::Single(row) => assert_eq!(row.inc_lvl, SeverityLevel::V2),
        other => panic!("Expected Single, got {}", other.kind()),
    }
}

#[test]
fn test_classify_no_catalog_vocabulary() {
    let engine = fixture_engine();
    assert!(engine.classify("girafe violette du zoo").is_no_match());
}

#[test]
fn test_classify_empty_and_stopword_only_input() {
    let engine = fixture_engine();
    assert!(engine.classify("").is_no_match());
    assert!(engine.classify("le la et est dans").is_no_match());
}

#[test]
fn test_classify_below_threshold_is_no_match() {
    let acronyms = AcronymDictionary::new();
    let builder = Normalizer::new(acronyms.clone());
    let catalog = vec![entry_from(
        &builder,
        "E1",
        1,
        "moteur ventilateur capot filtre joint",
    )];
    let engine = MatchEngine::new(catalog, acronyms);

    // One of five tokens: 0.2 < 0.4.
    assert!(engine.classify("le moteur").is_no_match());
}

#[test]
fn test_classify_duplicate_descriptions_share_frequency() {
    let acronyms = AcronymDictionary::new();
    let builder = Normalizer::new(acronyms.clone());
    let catalog = vec![
        entry_from(&builder, "E1", 3, "moteur bloqué arrêt"),
        entry_from(&builder, "E2", 7, "moteur bloqué arrêt"),
    ];
    let engine = MatchEngine::new(catalog, acronyms);

    // Identical descriptions dedup to one winning token set, but both rows
    // enter the frequency computation; E2 dominates at 0.7.
    let result = engine.classify("le moteur est bloqué");
    match result {
        MatchResult::Single(row) => {
            assert_eq!(row.elt_id, "E2");
            assert!((row.frequence - 0.7).abs() < 1e-12);
        }
        other => panic!("Expected Single, got {}", other.kind()),
    }
}

#[test]
fn test_classify_with_acronym_expansion() {
    let mut acronyms = AcronymDictionary::new();
    acronyms.insert("fdc".to_string(), "fin de course".to_string());
    let builder = Normalizer::new(acronyms.clone());
    let catalog = vec![
        entry_from(&builder, "E1", 5, "capteur fin de course bloqué"),
        entry_from(&builder, "E2", 5, "courroie ventilateur cassée"),
    ];
    let engine = MatchEngine::new(catalog, acronyms);

    // "FDC bloqué" expands to three of the row's four canonical tokens.
    let result = engine.classify("FDC bloqué");
    match result {
        MatchResult::Single(row) => {
            assert_eq!(row.elt_id, "E1");
            assert!((row.confiance - 0.75).abs() < 1e-9);
        }
        other => panic!("Expected Single, got {}", other.kind()),
    }
}

#[test]
fn test_result_rows_are_subset_of_catalog() {
    let engine = fixture_engine();
    if let MatchResult::Single(row) = engine.classify("capteur température défaillant") {
        assert!(engine.catalog().iter().any(|e| e.elt_id == row.elt_id));
    } else {
        panic!("Expected Single");
    }
}
