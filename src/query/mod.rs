//! # Query Module
//!
//! Sorting over the full patient collection.

mod errors;
mod sort;

pub use errors::{QueryError, QueryResult};
pub use sort::{sort_patients, SortField, SortOrder, SortSpec};
