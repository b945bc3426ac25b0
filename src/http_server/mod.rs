//! # HTTP Server Module
//!
//! axum server exposing the patient registry.
//!
//! # Endpoints
//!
//! - `GET /`, `GET /about` - Service messages
//! - `GET /health` - Health check
//! - `GET /view` - All patients keyed by id
//! - `GET /patient/:id` - One patient
//! - `GET /sort?sort_by=&order=` - Patients ordered by height, weight or bmi
//! - `POST /create` - Create a patient
//! - `PUT /update/:id` - Partially update a patient
//! - `DELETE /delete/:id` - Remove a patient

pub mod config;
pub mod errors;
pub mod info_routes;
pub mod patient_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
