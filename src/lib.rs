//! faultcode — maps free-text French operator incident notes to entries of a
//! fixed defect-code catalog via token-overlap matching.
//!
//! Pipeline: raw text → [`nlp::Normalizer`] → candidate retrieval over a
//! [`matcher::CatalogIndex`] → overlap scoring and disambiguation → a tagged
//! [`MatchResult`] (single row, bounded shortlist, or no match).

pub mod loader;
pub mod matcher;
pub mod nlp;
pub mod types;

pub use matcher::engine::MatchEngine;
pub use matcher::types::{MatchResult, MatchedRow, SeverityLevel};
