//! # JSON File Store
//!
//! The whole collection lives in one pretty-printed JSON object keyed by
//! patient id. Writes go to a sibling temp file which is fsynced and then
//! renamed over the target, so readers see either the old or the new file.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::backend::{PatientCollection, PatientStore};
use super::errors::{StorageError, StorageResult};
use crate::observability::{log_event_with_fields, Event};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Create the backing file with an empty collection.
    ///
    /// Fails with `AlreadyExists` rather than truncating existing data.
    pub fn initialize(&self) -> StorageResult<()> {
        if self.path.exists() {
            return Err(StorageError::AlreadyExists(self.display_path()));
        }
        self.save_all(&PatientCollection::new())?;
        log_event_with_fields(Event::StoreInitialized, &[("path", &self.display_path())]);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "patients.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }

    fn load_failed(&self, reason: &str) -> PatientCollection {
        log_event_with_fields(
            Event::StoreLoadFailed,
            &[("path", &self.display_path()), ("reason", reason)],
        );
        PatientCollection::new()
    }
}

impl PatientStore for JsonFileStore {
    fn load_all(&self) -> PatientCollection {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // A store that was never written is simply empty
            Err(e) if e.kind() == ErrorKind::NotFound => return PatientCollection::new(),
            Err(e) => return self.load_failed(&e.to_string()),
        };

        match serde_json::from_str::<PatientCollection>(&content) {
            Ok(collection) => collection,
            Err(e) => self.load_failed(&e.to_string()),
        }
    }

    fn save_all(&self, collection: &PatientCollection) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(collection)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::io(parent.display().to_string(), e))?;
            }
        }

        let temp_path = self.temp_path();
        let temp_display = temp_path.display().to_string();

        if let Err(e) = write_synced(&temp_path, content.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::io(temp_display, e));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::io(self.display_path(), e));
        }

        if let Some(parent) = self.path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        log_event_with_fields(
            Event::StoreSaved,
            &[
                ("path", &self.display_path()),
                ("patients", &collection.len().to_string()),
            ],
        );
        Ok(())
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> PatientCollection {
        let mut collection = PatientCollection::new();
        collection.insert(
            "P001".to_string(),
            json!({"name": "Ananya", "city": "Guwahati", "age": 28, "gender": "female",
                   "height": 1.65, "weight": 90.0, "bmi": 33.06, "verdict": "Obesity"}),
        );
        collection
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("patients.json"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_non_object_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(JsonFileStore::new(&path).load_all().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("patients.json"));

        store.save_all(&sample()).unwrap();
        assert_eq!(store.load_all(), sample());
    }

    #[test]
    fn test_saved_file_is_indented_and_keyed_by_id() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("patients.json"));
        store.save_all(&sample()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n  \"P001\": {\n    \""));
        assert!(!content.contains("\"id\""));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("nested/dir/patients.json"));
        store.save_all(&sample()).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path().join("nested/dir"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("patients.json")]);
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("patients.json"));
        store.save_all(&sample()).unwrap();
        store.save_all(&PatientCollection::new()).unwrap();

        assert!(store.load_all().is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn test_initialize_refuses_existing_store() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("patients.json"));

        store.initialize().unwrap();
        assert!(store.load_all().is_empty());
        assert!(matches!(
            store.initialize(),
            Err(StorageError::AlreadyExists(_))
        ));
    }
}
