//! Tabular loading of the defect catalog and the acronym dictionary.

pub mod acronyms;
pub mod catalog;

pub use acronyms::load_acronyms;
pub use catalog::{load_catalog, CatalogEntry};
