//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every entity gets the same uniform surface: find all, find by key, save,
//! delete by key, delete all. Rooms key on their name; everything else keys
//! on a numeric id.

use async_trait::async_trait;

use crate::domain::entities::{
    Appointment, AppointmentId, Doctor, DoctorId, NewAppointment, NewDoctor, NewPatient, Patient,
    PatientId, Room,
};
use crate::error::DomainError;

/// Repository for Doctor entities
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// List every doctor
    async fn find_all(&self) -> Result<Vec<Doctor>, DomainError>;

    /// Find a doctor by id
    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DomainError>;

    /// Persist a new doctor and return it with its assigned id
    async fn save(&self, doctor: &NewDoctor) -> Result<Doctor, DomainError>;

    /// Delete a doctor by id
    async fn delete_by_id(&self, id: &DoctorId) -> Result<(), DomainError>;

    /// Delete every doctor
    async fn delete_all(&self) -> Result<(), DomainError>;
}

/// Repository for Patient entities
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// List every patient
    async fn find_all(&self) -> Result<Vec<Patient>, DomainError>;

    /// Find a patient by id
    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, DomainError>;

    /// Persist a new patient and return it with its assigned id
    async fn save(&self, patient: &NewPatient) -> Result<Patient, DomainError>;

    /// Delete a patient by id
    async fn delete_by_id(&self, id: &PatientId) -> Result<(), DomainError>;

    /// Delete every patient
    async fn delete_all(&self) -> Result<(), DomainError>;
}

/// Repository for Room entities
///
/// Rooms have no surrogate id; the name is the key throughout.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// List every room
    async fn find_all(&self) -> Result<Vec<Room>, DomainError>;

    /// Find a room by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError>;

    /// Persist a room. Fails if the name is empty or already taken.
    async fn save(&self, room: &Room) -> Result<Room, DomainError>;

    /// Delete a room by name
    async fn delete_by_name(&self, name: &str) -> Result<(), DomainError>;

    /// Delete every room
    async fn delete_all(&self) -> Result<(), DomainError>;
}

/// Repository for Appointment entities
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// List every appointment
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Find an appointment by id
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError>;

    /// Persist a new appointment and return it with its assigned id
    async fn save(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError>;

    /// Delete an appointment by id
    async fn delete_by_id(&self, id: &AppointmentId) -> Result<(), DomainError>;

    /// Delete every appointment
    async fn delete_all(&self) -> Result<(), DomainError>;
}
