//! Scheduling service
//!
//! Owns the appointment booking rule: a booking must have a well formed
//! interval and must not collide with any existing appointment in the same
//! room. Everything else in the API is plain CRUD.

use std::sync::Arc;

use crate::domain::entities::{Appointment, NewAppointment};
use crate::domain::ports::AppointmentRepository;
use crate::error::DomainError;

/// Service for booking appointments
pub struct SchedulingService {
    appointments: Arc<dyn AppointmentRepository>,
}

impl SchedulingService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }

    /// Book a new appointment.
    ///
    /// Validation order: the interval must finish strictly after it starts,
    /// then every existing appointment is scanned for a same-room overlap
    /// before the booking is saved. The scan and the save are not atomic;
    /// two concurrent requests can both pass the scan and book overlapping
    /// slots.
    pub async fn book(&self, request: &NewAppointment) -> Result<Appointment, DomainError> {
        if !request.has_valid_interval() {
            return Err(DomainError::Validation(
                "appointment must finish after it starts".to_string(),
            ));
        }

        let existing = self.appointments.find_all().await?;
        if let Some(taken) = existing.iter().find(|a| request.conflicts_with(a)) {
            tracing::debug!(
                room = %request.room_name,
                "booking rejected, overlaps appointment {}",
                taken.id
            );
            return Err(DomainError::Conflict(format!(
                "room {} is already booked from {} to {}",
                taken.room_name, taken.starts_at, taken.finishes_at
            )));
        }

        self.appointments.save(request).await
    }
}
