//! Normalization pipeline turning raw text into canonical tokens.
//!
//! Pipeline:
//! 1. charabia word segmentation (standalone `-` separators kept)
//! 2. Acronym expansion (lowercased lookup, expansion may be multi-word)
//! 3. Hyphen re-fusion (undo the tokenizer splitting hyphenated compounds)
//! 4. Re-split on whitespace (flatten multi-word expansions)
//! 5. Punctuation filter (whole-token drop)
//! 6. Stopword filter
//! 7. Lowercase → Snowball-FR stemming → diacritic folding
//! 8. Deduplicate preserving first-occurrence order
//!
//! The same rules produce the catalog's `elt_inc` fields upstream, so query
//! tokens and catalog tokens compare exactly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use charabia::Tokenize;
use deunicode::deunicode;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::nlp::dedup_preserving_order;
use crate::nlp::stopwords::StopwordSet;

/// Lowercased abbreviation → expansion phrase. Loaded once, read-only.
pub type AcronymDictionary = BTreeMap<String, String>;

/// Tokens containing any of these characters anywhere are dropped whole.
/// A bare `-` is deliberately absent: a lone unmerged hyphen survives into
/// the canonical stream.
static RE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.?!:',()"]"#).expect("Invalid regex"));

/// Deterministic text → canonical-token pipeline. No I/O; the acronym
/// dictionary and stopword set are injected once at construction.
pub struct Normalizer {
    acronyms: AcronymDictionary,
    stopwords: StopwordSet,
    stemmer: Stemmer,
}

impl Normalizer {
    pub fn new(acronyms: AcronymDictionary) -> Self {
        Self::with_stopwords(acronyms, StopwordSet::new())
    }

    pub fn with_stopwords(acronyms: AcronymDictionary, stopwords: StopwordSet) -> Self {
        Normalizer {
            acronyms,
            stopwords,
            stemmer: Stemmer::create(Algorithm::French),
        }
    }

    /// Normalize `text` into a deduplicated ordered sequence of canonical
    /// tokens. Empty or fully-filtered input yields an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for token in text.tokenize() {
            let lemma = token.lemma().trim().to_string();
            if token.is_word() && !lemma.is_empty() {
                words.push(self.expand_acronym(&lemma));
            } else if lemma == "-" {
                // Separator produced when the tokenizer splits a compound.
                words.push(lemma);
            }
        }

        let words = refuse_hyphens(words);

        // Expansions may contain internal spaces; flatten back to
        // single-word units.
        let words: Vec<String> = words
            .join(" ")
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let canonical: Vec<String> = words
            .into_iter()
            .filter(|w| !has_punctuation(w))
            .filter(|w| !self.stopwords.contains(w))
            .map(|w| deunicode(&self.stemmer.stem(&w.to_lowercase())))
            .collect();

        dedup_preserving_order(canonical)
    }

    /// Replace a token by its expansion when its lowercased form keys the
    /// dictionary; otherwise return the token unchanged.
    fn expand_acronym(&self, word: &str) -> String {
        self.acronyms
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }
}

/// Re-fuse hyphenated compounds: splice every `(prev, "-", next)` triple
/// into `prev-next` until no standalone hyphen has a neighbor on both sides.
/// Boundary hyphens are left as literal `-` tokens.
pub(crate) fn refuse_hyphens(mut words: Vec<String>) -> Vec<String> {
    while let Some(i) = mergeable_hyphen(&words) {
        let joined = format!("{}-{}", words[i - 1], words[i + 1]);
        words.splice(i - 1..=i + 1, std::iter::once(joined));
    }
    words
}

fn mergeable_hyphen(words: &[String]) -> Option<usize> {
    words
        .iter()
        .enumerate()
        .find(|(i, w)| w.as_str() == "-" && *i >= 1 && i + 1 < words.len())
        .map(|(i, _)| i)
}

/// Whole-token punctuation test: one filtered character anywhere drops the
/// token entirely, no trimming.
pub(crate) fn has_punctuation(word: &str) -> bool {
    RE_PUNCT.is_match(word)
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
