use super::*;

use crate::loader::catalog::CatalogEntry;

fn entry(elt_id: &str, count: u64, elt_inc: &str) -> CatalogEntry {
    CatalogEntry {
        elt_id: elt_id.to_string(),
        elt: format!("element {elt_id}"),
        inc_id: format!("I-{elt_id}"),
        inc: format!("incident {elt_id}"),
        count,
        elt_inc: elt_inc.to_string(),
        elt_inc_stem_unique: crate::nlp::dedup_preserving_order(
            elt_inc.split_whitespace().map(str::to_string).collect(),
        )
        .join(" "),
    }
}

#[test]
fn test_build_buckets_every_token() {
    let catalog = vec![
        entry("E1", 10, "moteur bloqu arret"),
        entry("E2", 3, "moteur chaud"),
    ];
    let index = CatalogIndex::build(&catalog);

    assert_eq!(index.len(), 4); // moteur, bloqu, arret, chaud
    assert_eq!(index.get("moteur").unwrap().len(), 2);
    assert_eq!(index.get("chaud").unwrap().len(), 1);
    assert!(index.get("inconnu").is_none());
}

#[test]
fn test_build_deduplicates_row_tokens_preserving_order() {
    let catalog = vec![entry("E1", 1, "capot ferm capot")];
    let index = CatalogIndex::build(&catalog);

    let sets = index.get("capot").unwrap();
    assert_eq!(sets.len(), 1, "repeated token indexes the set once");
    assert_eq!(sets[0], vec!["capot".to_string(), "ferm".to_string()]);
}

#[test]
fn test_duplicate_rows_appear_twice_in_buckets() {
    let catalog = vec![
        entry("E1", 4, "moteur bloqu"),
        entry("E2", 6, "moteur bloqu"),
    ];
    let index = CatalogIndex::build(&catalog);

    let sets = index.get("moteur").unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0], sets[1]);
}

#[test]
fn test_empty_catalog_builds_empty_index() {
    let index = CatalogIndex::build(&[]);
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}

#[test]
fn test_iteration_is_key_ordered() {
    let catalog = vec![entry("E1", 1, "zone moteur arret")];
    let index = CatalogIndex::build(&catalog);

    let keys: Vec<&String> = index.iter().map(|(k, _)| k).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
