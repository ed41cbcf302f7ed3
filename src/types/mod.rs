pub mod errors;

pub use errors::{LoadError, LoadResult};
