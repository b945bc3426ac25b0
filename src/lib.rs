//! patientdb - patient records with validated, derived health metrics
//!
//! Records live in one JSON file that is loaded and rewritten whole on every
//! request. `bmi` and `verdict` are derived from height and weight whenever
//! a record is built.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod patient;
pub mod query;
pub mod registry;
pub mod storage;
