//! # Patient Store
//!
//! Whole-collection persistence: every request loads the full collection
//! and every mutation writes it back in full.
//!
//! - `load_all` fails open to an empty collection
//! - `save_all` replaces the backing contents

mod backend;
mod errors;
mod json_file;
mod memory;

pub use backend::{PatientCollection, PatientStore};
pub use errors::{StorageError, StorageResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
