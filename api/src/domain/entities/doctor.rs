//! Doctor domain entity
//!
//! Represents a doctor who can be booked for appointments.

/// Unique identifier for a doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(pub i64);

impl From<i64> for DoctorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A doctor on the clinic roster
#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: DoctorId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

/// Data needed to register a new doctor
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}
