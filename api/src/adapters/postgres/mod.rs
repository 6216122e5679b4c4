//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod appointment_repo;
pub mod doctor_repo;
pub mod patient_repo;
pub mod room_repo;

#[cfg(test)]
mod integration_tests;

pub use appointment_repo::PostgresAppointmentRepository;
pub use doctor_repo::PostgresDoctorRepository;
pub use patient_repo::PostgresPatientRepository;
pub use room_repo::PostgresRoomRepository;
