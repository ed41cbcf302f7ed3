//! Severity (`inc_lvl`) tagging from query tokens.

use crate::matcher::types::SeverityLevel;

/// Markers scanned in priority order; bare digits map onto the same levels.
const LEVEL_MARKERS: &[(&str, SeverityLevel)] = &[
    ("v1", SeverityLevel::V1),
    ("v2", SeverityLevel::V2),
    ("v3", SeverityLevel::V3),
    ("1", SeverityLevel::V1),
    ("2", SeverityLevel::V2),
    ("3", SeverityLevel::V3),
];

/// First level marker found in the canonical query tokens, scanning markers
/// in priority order. Independent of matching; computed once per query.
pub fn severity_tag(tokens: &[String]) -> SeverityLevel {
    for (marker, level) in LEVEL_MARKERS {
        if tokens.iter().any(|t| t == marker) {
            return *level;
        }
    }
    SeverityLevel::NotFound
}

#[cfg(test)]
#[path = "tests/severity_tests.rs"]
mod tests;
