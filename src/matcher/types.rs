//! Domain types for the matching pipeline.
//!
//! Contains: TokenSet, SeverityLevel, MatchedRow, MatchResult.

use serde::{Deserialize, Serialize};

/// Ordered, deduplicated canonical tokens of one catalog description.
/// Multiple catalog rows may share a structurally equal token set.
pub type TokenSet = Vec<String>;

/// Severity level parsed from query tokens, independent of the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityLevel {
    V1,
    V2,
    V3,
    /// No level marker present in the query.
    NotFound,
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityLevel::V1 => write!(f, "v1"),
            SeverityLevel::V2 => write!(f, "v2"),
            SeverityLevel::V3 => write!(f, "v3"),
            SeverityLevel::NotFound => write!(f, "Not found"),
        }
    }
}

/// One catalog row returned to the caller, with its confidence score,
/// within-tie frequency share, and severity tag attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRow {
    pub elt_id: String,
    pub elt: String,
    pub inc_id: String,
    pub inc: String,
    /// Row `count` divided by the summed `count` of all rows matching the
    /// winning token sets.
    pub frequence: f64,
    /// The overlap score that selected this row.
    pub confiance: f64,
    pub inc_lvl: SeverityLevel,
}

/// Outcome of one classify call. Callers route on the variant instead of
/// inspecting lengths or sentinel strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    /// No catalog vocabulary in the query, or best score below threshold.
    NoMatch,
    /// Exactly one disambiguation rule fired.
    Single(MatchedRow),
    /// Ambiguous: up to five rows, unranked.
    Shortlist(Vec<MatchedRow>),
}

impl MatchResult {
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }

    /// Short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchResult::NoMatch => "no_match",
            MatchResult::Single(_) => "single",
            MatchResult::Shortlist(_) => "shortlist",
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
