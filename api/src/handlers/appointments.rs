//! Appointment handlers
//!
//! Booking goes through the scheduling service, which owns interval
//! validation and the room-overlap check. The remaining endpoints are plain
//! CRUD over the appointment book.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Appointment, AppointmentId, DoctorId, NewAppointment, PatientId};
use crate::error::AppError;
use crate::AppState;

/// Request body for booking an appointment
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub room_name: String,
    /// RFC 3339 timestamp, e.g. "2024-04-02T09:00:00Z"
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

/// Response body for an appointment
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub room_name: String,
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.0,
            patient_id: appointment.patient_id.0,
            doctor_id: appointment.doctor_id.0,
            room_name: appointment.room_name,
            starts_at: appointment.starts_at,
            finishes_at: appointment.finishes_at,
        }
    }
}

/// GET /api/appointments
///
/// List the whole appointment book. Responds 204 when nothing is booked.
pub async fn list_appointments(State(state): State<AppState>) -> Result<Response, AppError> {
    let appointments = state.appointments.find_all().await?;
    if appointments.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<AppointmentResponse> = appointments
        .into_iter()
        .map(AppointmentResponse::from)
        .collect();
    Ok(Json(body).into_response())
}

/// GET /api/appointments/:id
///
/// Fetch a single appointment by id.
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state
        .appointments
        .find_by_id(&AppointmentId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

    Ok(Json(appointment.into()))
}

/// POST /api/appointment
///
/// Book an appointment. Rejects reversed or empty intervals with 400 and
/// rooms that are already taken for the slot with 406.
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let new_appointment = NewAppointment {
        patient_id: PatientId(request.patient_id),
        doctor_id: DoctorId(request.doctor_id),
        room_name: request.room_name,
        starts_at: request.starts_at,
        finishes_at: request.finishes_at,
    };
    let appointment = state.scheduling.book(&new_appointment).await?;

    Ok(Json(appointment.into()))
}

/// DELETE /api/appointments/:id
///
/// Cancel an appointment, failing with 404 when the id is unknown.
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let appointment_id = AppointmentId(id);
    state
        .appointments
        .find_by_id(&appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

    state.appointments.delete_by_id(&appointment_id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/appointments
///
/// Clear the whole appointment book.
pub async fn delete_all_appointments(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.appointments.delete_all().await?;
    Ok(StatusCode::OK)
}
