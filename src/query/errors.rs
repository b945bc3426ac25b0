//! # Query Errors

use thiserror::Error;

use super::sort::SortField;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Invalid field '{}': select from {:?}", .0, SortField::NAMES)]
    InvalidField(String),

    #[error("Invalid order '{0}': order must be either asc or desc")]
    InvalidDirection(String),

    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),
}
