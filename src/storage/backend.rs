//! # Store Trait

use std::collections::BTreeMap;

use serde_json::Value;

use super::errors::StorageResult;

/// Patient id → stored document (every record field except `id`).
///
/// Documents are kept as raw JSON so that a malformed entry in the backing
/// file can still be listed and sorted; validation happens when a record is
/// created or rebuilt.
pub type PatientCollection = BTreeMap<String, Value>;

/// Whole-collection persistence for patient records
pub trait PatientStore: Send + Sync + std::fmt::Debug {
    /// Load the full collection. Never fails: a missing or unreadable
    /// backing resource yields an empty collection.
    fn load_all(&self) -> PatientCollection;

    /// Replace the backing resource's contents with `collection`.
    fn save_all(&self, collection: &PatientCollection) -> StorageResult<()>;
}
