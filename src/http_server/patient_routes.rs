//! Patient HTTP Routes
//!
//! Listing, lookup, sorting and CRUD over the patient registry. The
//! registry does synchronous file I/O, so every call runs on the blocking
//! pool.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::info_routes::MessageResponse;
use crate::registry::{PatientRegistry, RegistryResult};
use crate::storage::PatientCollection;

// ==================
// Shared State
// ==================

/// Patient state shared across handlers
#[derive(Debug)]
pub struct PatientState {
    pub registry: Arc<PatientRegistry>,
}

impl PatientState {
    pub fn new(registry: Arc<PatientRegistry>) -> Self {
        Self { registry }
    }

    async fn run<T, F>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(&PatientRegistry) -> RegistryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let registry = self.registry.clone();
        let result = tokio::task::spawn_blocking(move || op(&registry))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(result?)
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatientsResponse {
    pub patients: PatientCollection,
}

#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub patient: Value,
}

#[derive(Debug, Serialize)]
pub struct SortedPatientsResponse {
    pub sorted_patients: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct PatientMutationResponse {
    pub message: String,
    pub patient: Value,
}

// ==================
// Patient Routes
// ==================

pub fn patient_routes(state: Arc<PatientState>) -> Router {
    Router::new()
        .route("/view", get(view_handler))
        .route("/patient/:id", get(get_patient_handler))
        .route("/sort", get(sort_handler))
        .route("/create", post(create_handler))
        .route("/update/:id", put(update_handler))
        .route("/delete/:id", delete(delete_handler))
        .with_state(state)
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

async fn view_handler(State(state): State<Arc<PatientState>>) -> ApiResult<Json<PatientsResponse>> {
    let patients = state.run(|registry| Ok(registry.list())).await?;
    Ok(Json(PatientsResponse { patients }))
}

async fn get_patient_handler(
    State(state): State<Arc<PatientState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PatientResponse>> {
    let patient = state.run(move |registry| registry.get(&id)).await?;
    Ok(Json(PatientResponse { patient }))
}

async fn sort_handler(
    State(state): State<Arc<PatientState>>,
    Query(query): Query<SortQuery>,
) -> ApiResult<Json<SortedPatientsResponse>> {
    let sorted_patients = state
        .run(move |registry| registry.sort(query.sort_by.as_deref(), query.order.as_deref()))
        .await?;
    Ok(Json(SortedPatientsResponse { sorted_patients }))
}

async fn create_handler(
    State(state): State<Arc<PatientState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PatientMutationResponse>)> {
    let body = json_body(payload)?;
    let patient = state.run(move |registry| registry.create(&body)).await?;

    Ok((
        StatusCode::CREATED,
        Json(PatientMutationResponse {
            message: "Patient created successfully".to_string(),
            patient,
        }),
    ))
}

async fn update_handler(
    State(state): State<Arc<PatientState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PatientMutationResponse>> {
    let body = json_body(payload)?;
    let patient = state
        .run(move |registry| registry.update(&id, &body))
        .await?;

    Ok(Json(PatientMutationResponse {
        message: "Patient updated successfully".to_string(),
        patient,
    }))
}

async fn delete_handler(
    State(state): State<Arc<PatientState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.run(move |registry| registry.delete(&id)).await?;
    Ok(Json(MessageResponse::new("Patient deleted successfully")))
}
