//! # Sorting
//!
//! Orders the stored documents by one numeric field. Documents missing the
//! field (or holding a non-numeric value) sort as `0`, so one malformed
//! record never fails the whole request.

use std::fmt;

use serde_json::Value;

use super::errors::{QueryError, QueryResult};
use crate::storage::PatientCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl SortField {
    pub const NAMES: [&'static str; 3] = ["height", "weight", "bmi"];

    pub fn parse(value: &str) -> QueryResult<Self> {
        match value {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            other => Err(QueryError::InvalidField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Height => "height",
            SortField::Weight => "weight",
            SortField::Bmi => "bmi",
        }
    }

    /// Sort key of one stored document
    fn key(&self, document: &Value) -> f64 {
        document
            .get(self.as_str())
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> QueryResult<Self> {
        match value {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(QueryError::InvalidDirection(other.to_string())),
        }
    }
}

/// Validated sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    /// Parse raw query parameters. `sort_by` is required; `order` defaults
    /// to ascending. The field is checked before the order.
    pub fn parse(sort_by: Option<&str>, order: Option<&str>) -> QueryResult<Self> {
        let field = SortField::parse(sort_by.ok_or(QueryError::MissingParam("sort_by"))?)?;
        let order = order.map(SortOrder::parse).transpose()?.unwrap_or_default();
        Ok(Self { field, order })
    }
}

/// Documents of `collection` ordered by `spec`, without their ids.
///
/// The sort is stable in both directions: ties keep id order.
pub fn sort_patients(collection: &PatientCollection, spec: SortSpec) -> Vec<Value> {
    let mut documents: Vec<&Value> = collection.values().collect();

    documents.sort_by(|a, b| {
        let ordering = spec.field.key(a).total_cmp(&spec.field.key(b));
        match spec.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    documents.into_iter().cloned().collect()
}
