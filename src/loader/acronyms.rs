//! Acronym dictionary loading.

use std::path::Path;

use serde::Deserialize;

use crate::nlp::AcronymDictionary;
use crate::types::LoadResult;

#[derive(Debug, Deserialize)]
struct AcronymRecord {
    abr: String,
    lib: String,
}

/// Load the abbreviation table from a headered CSV file (`abr`, `lib`
/// columns). Keys are lowercased; rows with an empty abbreviation are
/// skipped.
pub fn load_acronyms(path: &Path) -> LoadResult<AcronymDictionary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut dictionary = AcronymDictionary::new();
    for record in reader.deserialize() {
        let record: AcronymRecord = record?;
        if record.abr.trim().is_empty() {
            continue;
        }
        dictionary.insert(
            record.abr.trim().to_lowercase(),
            record.lib.trim().to_string(),
        );
    }

    log::info!(
        "Loaded {} acronym expansions from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

#[cfg(test)]
#[path = "tests/acronyms_tests.rs"]
mod tests;
