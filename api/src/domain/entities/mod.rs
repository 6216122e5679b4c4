//! Domain entities
//!
//! Pure domain models representing the clinic's core concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

pub use appointment::{Appointment, AppointmentId, NewAppointment};
pub use doctor::{Doctor, DoctorId, NewDoctor};
pub use patient::{NewPatient, Patient, PatientId};
pub use room::Room;
