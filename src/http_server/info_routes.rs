//! Informational HTTP Routes
//!
//! Static service messages and a health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

pub const SERVICE_MESSAGE: &str = "Patient Management System API";
pub const ABOUT_MESSAGE: &str = "A fully functional Patient Management System API to build your records and manage your patients.";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn info_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/about", get(about_handler))
        .route("/health", get(health_handler))
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(SERVICE_MESSAGE))
}

async fn about_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(ABOUT_MESSAGE))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
