//! Doctor handlers
//!
//! CRUD endpoints for the doctor roster.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Doctor, DoctorId, NewDoctor};
use crate::error::AppError;
use crate::AppState;

/// Request body for registering a doctor
#[derive(Debug, Deserialize)]
pub struct CreateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

/// Response body for a doctor
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.0,
            first_name: doctor.first_name,
            last_name: doctor.last_name,
            age: doctor.age,
            email: doctor.email,
        }
    }
}

/// GET /api/doctors
///
/// List every registered doctor. Responds 204 when the roster is empty.
pub async fn list_doctors(State(state): State<AppState>) -> Result<Response, AppError> {
    let doctors = state.doctors.find_all().await?;
    if doctors.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<DoctorResponse> = doctors.into_iter().map(DoctorResponse::from).collect();
    Ok(Json(body).into_response())
}

/// GET /api/doctors/:id
///
/// Fetch a single doctor by id.
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DoctorResponse>, AppError> {
    let doctor = state
        .doctors
        .find_by_id(&DoctorId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", id)))?;

    Ok(Json(doctor.into()))
}

/// POST /api/doctor
///
/// Register a new doctor and return the stored record with its id.
pub async fn create_doctor(
    State(state): State<AppState>,
    payload: Result<Json<CreateDoctorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DoctorResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let new_doctor = NewDoctor {
        first_name: request.first_name,
        last_name: request.last_name,
        age: request.age,
        email: request.email,
    };
    let doctor = state.doctors.save(&new_doctor).await?;

    Ok((StatusCode::CREATED, Json(doctor.into())))
}

/// DELETE /api/doctors/:id
///
/// Remove a doctor, failing with 404 when the id is unknown.
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let doctor_id = DoctorId(id);
    state
        .doctors
        .find_by_id(&doctor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", id)))?;

    state.doctors.delete_by_id(&doctor_id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/doctors
///
/// Clear the whole roster.
pub async fn delete_all_doctors(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.doctors.delete_all().await?;
    Ok(StatusCode::OK)
}
