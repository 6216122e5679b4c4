//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    Appointment, AppointmentId, Doctor, DoctorId, Patient, PatientId, Room,
};

/// Create a test doctor with default values
pub fn test_doctor() -> Doctor {
    Doctor {
        id: DoctorId(1),
        first_name: "Amara".to_string(),
        last_name: "Reyes".to_string(),
        age: 24,
        email: "a.reyes@clinic.test".to_string(),
    }
}

/// Create a test doctor with a specific id
pub fn test_doctor_with_id(id: i64) -> Doctor {
    Doctor {
        id: DoctorId(id),
        first_name: format!("Doctor{}", id),
        last_name: "Reyes".to_string(),
        age: 24,
        email: format!("doctor{}@clinic.test", id),
    }
}

/// Create a test patient with default values
pub fn test_patient() -> Patient {
    Patient {
        id: PatientId(1),
        first_name: "Jose Luis".to_string(),
        last_name: "Olaya".to_string(),
        age: 37,
        email: "j.olaya@clinic.test".to_string(),
    }
}

/// Create a test patient with a specific id
pub fn test_patient_with_id(id: i64) -> Patient {
    Patient {
        id: PatientId(id),
        first_name: format!("Patient{}", id),
        last_name: "Olaya".to_string(),
        age: 37,
        email: format!("patient{}@clinic.test", id),
    }
}

/// Create a test room with the default name
pub fn test_room() -> Room {
    Room::new("Cardiology")
}

/// Create a test room with a specific name
pub fn test_room_named(name: &str) -> Room {
    Room::new(name)
}

/// Timestamp on a fixed clinic day at the given whole hour
pub fn clinic_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 2, hour, 0, 0).unwrap()
}

/// Create a booked appointment in the given room
pub fn test_appointment(
    id: i64,
    room: &str,
    starts_at: DateTime<Utc>,
    finishes_at: DateTime<Utc>,
) -> Appointment {
    Appointment {
        id: AppointmentId(id),
        patient_id: PatientId(1),
        doctor_id: DoctorId(1),
        room_name: room.to_string(),
        starts_at,
        finishes_at,
    }
}
