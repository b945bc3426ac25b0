//! # In-Memory Store

use std::sync::RwLock;

use super::backend::{PatientCollection, PatientStore};
use super::errors::StorageResult;

/// Volatile store, used by tests and `start --in-memory`
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RwLock<PatientCollection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: PatientCollection) -> Self {
        Self {
            collection: RwLock::new(collection),
        }
    }
}

impl PatientStore for MemoryStore {
    fn load_all(&self) -> PatientCollection {
        // A poisoned lock still holds the last fully written collection
        match self.collection.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save_all(&self, collection: &PatientCollection) -> StorageResult<()> {
        let mut guard = match self.collection.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = collection.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_empty() {
        assert!(MemoryStore::new().load_all().is_empty());
    }

    #[test]
    fn test_save_replaces_contents() {
        let store = MemoryStore::with_collection(PatientCollection::from([(
            "P001".to_string(),
            json!({"name": "A"}),
        )]));

        let mut next = PatientCollection::new();
        next.insert("P002".to_string(), json!({"name": "B"}));
        store.save_all(&next).unwrap();

        assert_eq!(store.load_all(), next);
    }
}
