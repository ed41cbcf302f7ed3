//! French stopword set with a domain keep-list.
//!
//! Seeded from a standard French stopword list, then the few words that are
//! diagnostically meaningful in operator notes are removed before first use.

use std::collections::HashSet;

use deunicode::deunicode;

/// Standard French stopwords (~170 words). Stored with accents; folded to
/// unaccented lowercase when the set is built.
const FRENCH_STOP_WORDS: &[&str] = &[
    // Articles
    "le", "la", "les", "un", "une", "des", "du", "de", "au", "aux",
    // Prépositions
    "a", "à", "dans", "sur", "pour", "avec", "sans", "entre", "vers", "par", "en",
    "chez", "contre", "sous", "devant", "derrière", "après", "avant", "pendant",
    "depuis", "dès", "jusqu",
    // Pronoms personnels
    "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "on",
    // Possessifs
    "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses",
    "notre", "votre", "nos", "vos", "leur", "leurs",
    // Pronoms démonstratifs / relatifs
    "ce", "cet", "cette", "ces", "celui", "celle", "ceux", "celles",
    "se", "me", "te", "lui", "y", "moi", "toi", "soi",
    "qui", "que", "quoi", "dont", "où", "lequel", "laquelle", "lesquels", "lesquelles",
    // Conjonctions
    "et", "ou", "mais", "donc", "car", "ni", "si", "comme",
    "lorsque", "quand", "puisque", "parce", "pourtant", "cependant", "or", "tandis",
    // Auxiliaires / verbes communs
    "est", "sont", "suis", "es", "êtes", "sommes", "ai", "as", "ont", "avons", "avez",
    "était", "été", "eu", "fait", "faire", "être", "avoir", "peut", "doit", "va", "vont",
    "sera", "seront", "avait", "avaient", "serait", "soit", "faut",
    // Adverbes
    "ne", "pas", "plus", "très", "bien", "aussi", "encore", "même",
    "tout", "tous", "toute", "toutes", "autre", "autres",
    "trop", "peu", "beaucoup", "déjà", "alors", "ainsi",
    "ici", "là", "jamais", "toujours", "souvent", "parfois",
    "maintenant", "hier", "demain", "fois", "bas", "haut",
    // Résidus d'élision
    "l", "d", "n", "s", "c", "qu", "j", "m", "t",
    // Divers
    "ça", "cela", "ceci", "oui", "non", "via",
];

/// Words removed from the default set before first use: they read as noise in
/// everyday French but carry diagnostic signal in incident descriptions
/// (position and sound of a fault).
pub const DOMAIN_SIGNAL_WORDS: &[&str] = &["son", "avant", "après", "bas"];

/// Read-only after construction; membership checks fold the probe the same
/// way the seed list was folded.
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build the default set: standard French list minus the domain keep-list.
    pub fn new() -> Self {
        let mut words: HashSet<String> = FRENCH_STOP_WORDS
            .iter()
            .map(|&w| deunicode(&w.to_lowercase()))
            .collect();
        for &keep in DOMAIN_SIGNAL_WORDS {
            words.remove(&deunicode(&keep.to_lowercase()));
        }
        StopwordSet { words }
    }

    /// Return `true` if `word` is a stopword. Accent- and case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&deunicode(&word.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/stopwords_tests.rs"]
mod tests;
