//! # Registry Module
//!
//! CRUD orchestration on top of the patient store and record model.

mod errors;
mod service;

pub use errors::{RegistryError, RegistryResult};
pub use service::PatientRegistry;
