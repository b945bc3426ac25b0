//! # Patient Registry
//!
//! Create/read/update/delete over a `PatientStore`. Every mutation is
//! load-full → mutate in memory → save-full.
//!
//! With the write gate enabled, mutations are serialized against each other
//! for their whole load/mutate/save span. Reads are never gated.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use super::errors::{RegistryError, RegistryResult};
use crate::observability::{log_event_with_fields, Event};
use crate::patient::{Patient, PatientUpdate};
use crate::query::{sort_patients, SortSpec};
use crate::storage::{PatientCollection, PatientStore};

#[derive(Debug)]
pub struct PatientRegistry {
    store: Arc<dyn PatientStore>,
    write_gate: Option<Mutex<()>>,
}

impl PatientRegistry {
    /// Registry with serialized writes
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self::with_write_gate(store, true)
    }

    /// `serialize_writes = false` leaves concurrent mutations unguarded;
    /// two racing writers may then lose one update.
    pub fn with_write_gate(store: Arc<dyn PatientStore>, serialize_writes: bool) -> Self {
        Self {
            store,
            write_gate: serialize_writes.then(|| Mutex::new(())),
        }
    }

    pub fn serializes_writes(&self) -> bool {
        self.write_gate.is_some()
    }

    fn lock_writes(&self) -> Option<MutexGuard<'_, ()>> {
        // The gate guards no data, so a poisoned lock is still usable
        self.write_gate
            .as_ref()
            .map(|gate| gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    /// The full collection, keyed by id
    pub fn list(&self) -> PatientCollection {
        self.store.load_all()
    }

    pub fn get(&self, id: &str) -> RegistryResult<Value> {
        self.store
            .load_all()
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Documents ordered by `sort_by`/`order`. Parameters are validated
    /// before the store is touched.
    pub fn sort(&self, sort_by: Option<&str>, order: Option<&str>) -> RegistryResult<Vec<Value>> {
        let spec = SortSpec::parse(sort_by, order)?;
        Ok(sort_patients(&self.store.load_all(), spec))
    }

    /// Create a patient from a full body including `id`.
    ///
    /// The body is validated before the id is checked for uniqueness.
    /// Returns the stored document.
    pub fn create(&self, body: &Value) -> RegistryResult<Value> {
        let patient = Patient::from_body(body)?;

        let _guard = self.lock_writes();
        let mut collection = self.store.load_all();

        if collection.contains_key(patient.id()) {
            return Err(RegistryError::Conflict(patient.id().to_string()));
        }

        let document = patient.to_document();
        collection.insert(patient.id().to_string(), document.clone());
        self.store.save_all(&collection)?;

        log_event_with_fields(
            Event::PatientCreated,
            &[("id", patient.id()), ("verdict", patient.verdict().as_str())],
        );
        Ok(document)
    }

    /// Apply a partial update and rebuild the record so that `bmi` and
    /// `verdict` follow the merged measurements.
    ///
    /// The merged record is revalidated as a whole: a stored field that is
    /// already invalid fails the update even if this payload does not
    /// touch it.
    pub fn update(&self, id: &str, body: &Value) -> RegistryResult<Value> {
        let update = PatientUpdate::from_document(body)?;

        let _guard = self.lock_writes();
        let mut collection = self.store.load_all();

        let stored = collection
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let patient = Patient::from_document(id, &update.apply(stored))?;
        let document = patient.to_document();
        collection.insert(id.to_string(), document.clone());
        self.store.save_all(&collection)?;

        log_event_with_fields(
            Event::PatientUpdated,
            &[("id", id), ("verdict", patient.verdict().as_str())],
        );
        Ok(document)
    }

    pub fn delete(&self, id: &str) -> RegistryResult<()> {
        let _guard = self.lock_writes();
        let mut collection = self.store.load_all();

        if collection.remove(id).is_none() {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        self.store.save_all(&collection)?;

        log_event_with_fields(Event::PatientDeleted, &[("id", id)]);
        Ok(())
    }
}
