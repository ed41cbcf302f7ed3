use serde::Serialize;
use thiserror::Error;

/// Errors surfaced while loading the catalog or acronym tables.
/// Matching itself never errors: failure there is data (`MatchResult::NoMatch`).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("Missing field: {0}")]
    MissingField(String),
}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        LoadError::Io(error.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(error.to_string())
    }
}

impl Serialize for LoadError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
