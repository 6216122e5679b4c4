//! Appointment domain entity
//!
//! An appointment books one patient with one doctor in one room for a time
//! interval. The overlap rule lives here as pure functions on the domain
//! types so it can be tested without storage or transport.

use chrono::{DateTime, Utc};

use super::doctor::DoctorId;
use super::patient::PatientId;

/// Unique identifier for an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub i64);

impl From<i64> for AppointmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booked appointment
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub room_name: String,
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

impl Appointment {
    /// True if both appointments occupy the same room and their intervals
    /// intersect. Boundary instants count: two appointments in the same room
    /// that share a start or finish overlap. Symmetric.
    pub fn overlaps(&self, other: &Appointment) -> bool {
        self.room_name == other.room_name
            && intervals_intersect(
                self.starts_at,
                self.finishes_at,
                other.starts_at,
                other.finishes_at,
            )
    }
}

/// Data needed to book a new appointment
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub room_name: String,
    pub starts_at: DateTime<Utc>,
    pub finishes_at: DateTime<Utc>,
}

impl NewAppointment {
    /// True if the interval is well formed: finish strictly after start.
    pub fn has_valid_interval(&self) -> bool {
        self.finishes_at > self.starts_at
    }

    /// True if booking this would collide with an existing appointment:
    /// same room, intersecting intervals, boundary instants included.
    pub fn conflicts_with(&self, existing: &Appointment) -> bool {
        self.room_name == existing.room_name
            && intervals_intersect(
                self.starts_at,
                self.finishes_at,
                existing.starts_at,
                existing.finishes_at,
            )
    }
}

/// Inclusive interval intersection: intervals that merely touch at one
/// boundary instant still intersect.
fn intervals_intersect(
    a_start: DateTime<Utc>,
    a_finish: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_finish: DateTime<Utc>,
) -> bool {
    !(a_finish < b_start || a_start > b_finish)
}
