//! Patient handlers
//!
//! CRUD endpoints for the patient register.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPatient, Patient, PatientId};
use crate::error::AppError;
use crate::AppState;

/// Request body for registering a patient
#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

/// Response body for a patient
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.0,
            first_name: patient.first_name,
            last_name: patient.last_name,
            age: patient.age,
            email: patient.email,
        }
    }
}

/// GET /api/patients
///
/// List every registered patient. Responds 204 when the register is empty.
pub async fn list_patients(State(state): State<AppState>) -> Result<Response, AppError> {
    let patients = state.patients.find_all().await?;
    if patients.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<PatientResponse> = patients.into_iter().map(PatientResponse::from).collect();
    Ok(Json(body).into_response())
}

/// GET /api/patients/:id
///
/// Fetch a single patient by id.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PatientResponse>, AppError> {
    let patient = state
        .patients
        .find_by_id(&PatientId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", id)))?;

    Ok(Json(patient.into()))
}

/// POST /api/patient
///
/// Register a new patient and return the stored record with its id.
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let new_patient = NewPatient {
        first_name: request.first_name,
        last_name: request.last_name,
        age: request.age,
        email: request.email,
    };
    let patient = state.patients.save(&new_patient).await?;

    Ok((StatusCode::CREATED, Json(patient.into())))
}

/// DELETE /api/patients/:id
///
/// Remove a patient, failing with 404 when the id is unknown.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let patient_id = PatientId(id);
    state
        .patients
        .find_by_id(&patient_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", id)))?;

    state.patients.delete_by_id(&patient_id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/patients
///
/// Clear the whole register.
pub async fn delete_all_patients(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.patients.delete_all().await?;
    Ok(StatusCode::OK)
}
