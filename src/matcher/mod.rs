//! Matching engine: catalog index, candidate retrieval, overlap scoring,
//! and result disambiguation.

pub mod engine;
pub mod index;
pub mod resolve;
pub mod retrieval;
pub mod scoring;
pub mod severity;
pub mod types;

pub use engine::MatchEngine;
pub use index::CatalogIndex;
pub use resolve::{resolve_rows, FREQUENCY_THRESHOLD, SHORTLIST_LIMIT};
pub use retrieval::retrieve_candidates;
pub use scoring::{best_matching_score, WinningSets, ACCEPTANCE_THRESHOLD};
pub use severity::severity_tag;
pub use types::{MatchResult, MatchedRow, SeverityLevel, TokenSet};
