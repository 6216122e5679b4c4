//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod rooms;

pub use appointments::{
    create_appointment, delete_all_appointments, delete_appointment, get_appointment,
    list_appointments,
};
pub use doctors::{create_doctor, delete_all_doctors, delete_doctor, get_doctor, list_doctors};
pub use patients::{
    create_patient, delete_all_patients, delete_patient, get_patient, list_patients,
};
pub use rooms::{create_room, delete_all_rooms, delete_room, get_room, list_rooms};
