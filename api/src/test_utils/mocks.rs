//! Mock implementations of port traits
//!
//! In-memory repositories backed by `HashMap`s. They behave like the Postgres
//! adapters from the caller's point of view: ids are handed out sequentially,
//! and the room store rejects the writes the database constraints would.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Appointment, AppointmentId, Doctor, DoctorId, NewAppointment, NewDoctor, NewPatient, Patient,
    PatientId, Room,
};
use crate::domain::ports::{
    AppointmentRepository, DoctorRepository, PatientRepository, RoomRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Doctor Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDoctorRepository {
    doctors: Arc<RwLock<HashMap<i64, Doctor>>>,
    // Highest id handed out so far
    next_id: AtomicI64,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a doctor for testing
    pub fn with_doctor(self, doctor: Doctor) -> Self {
        {
            let mut doctors = self.doctors.write().unwrap();
            self.next_id.fetch_max(doctor.id.0, Ordering::SeqCst);
            doctors.insert(doctor.id.0, doctor);
        }
        self
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn find_all(&self) -> Result<Vec<Doctor>, DomainError> {
        let doctors = self.doctors.read().unwrap();
        // Ordered by id so listing assertions are stable
        let mut all: Vec<Doctor> = doctors.values().cloned().collect();
        all.sort_by_key(|d| d.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DomainError> {
        let doctors = self.doctors.read().unwrap();
        Ok(doctors.get(&id.0).cloned())
    }

    async fn save(&self, new_doctor: &NewDoctor) -> Result<Doctor, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let doctor = Doctor {
            id: DoctorId(id),
            first_name: new_doctor.first_name.clone(),
            last_name: new_doctor.last_name.clone(),
            age: new_doctor.age,
            email: new_doctor.email.clone(),
        };

        let mut doctors = self.doctors.write().unwrap();
        doctors.insert(id, doctor.clone());
        Ok(doctor)
    }

    async fn delete_by_id(&self, id: &DoctorId) -> Result<(), DomainError> {
        let mut doctors = self.doctors.write().unwrap();
        doctors.remove(&id.0);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut doctors = self.doctors.write().unwrap();
        doctors.clear();
        Ok(())
    }
}

// ============================================================================
// In-Memory Patient Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPatientRepository {
    patients: Arc<RwLock<HashMap<i64, Patient>>>,
    next_id: AtomicI64,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a patient for testing
    pub fn with_patient(self, patient: Patient) -> Self {
        {
            let mut patients = self.patients.write().unwrap();
            self.next_id.fetch_max(patient.id.0, Ordering::SeqCst);
            patients.insert(patient.id.0, patient);
        }
        self
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        let patients = self.patients.read().unwrap();
        let mut all: Vec<Patient> = patients.values().cloned().collect();
        all.sort_by_key(|p| p.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, DomainError> {
        let patients = self.patients.read().unwrap();
        Ok(patients.get(&id.0).cloned())
    }

    async fn save(&self, new_patient: &NewPatient) -> Result<Patient, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let patient = Patient {
            id: PatientId(id),
            first_name: new_patient.first_name.clone(),
            last_name: new_patient.last_name.clone(),
            age: new_patient.age,
            email: new_patient.email.clone(),
        };

        let mut patients = self.patients.write().unwrap();
        patients.insert(id, patient.clone());
        Ok(patient)
    }

    async fn delete_by_id(&self, id: &PatientId) -> Result<(), DomainError> {
        let mut patients = self.patients.write().unwrap();
        patients.remove(&id.0);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut patients = self.patients.write().unwrap();
        patients.clear();
        Ok(())
    }
}

// ============================================================================
// In-Memory Room Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Arc<RwLock<HashMap<String, Room>>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a room for testing
    pub fn with_room(self, room: Room) -> Self {
        {
            let mut rooms = self.rooms.write().unwrap();
            rooms.insert(room.name.clone(), room);
        }
        self
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_all(&self) -> Result<Vec<Room>, DomainError> {
        let rooms = self.rooms.read().unwrap();
        let mut all: Vec<Room> = rooms.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError> {
        let rooms = self.rooms.read().unwrap();
        Ok(rooms.get(name).cloned())
    }

    async fn save(&self, room: &Room) -> Result<Room, DomainError> {
        // Same failures the rooms table constraints produce
        if room.name.is_empty() {
            return Err(DomainError::Database(
                "new row for relation \"rooms\" violates check constraint \"rooms_name_check\""
                    .to_string(),
            ));
        }

        let mut rooms = self.rooms.write().unwrap();
        if rooms.contains_key(&room.name) {
            return Err(DomainError::Database(
                "duplicate key value violates unique constraint \"rooms_pkey\"".to_string(),
            ));
        }

        rooms.insert(room.name.clone(), room.clone());
        Ok(room.clone())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), DomainError> {
        let mut rooms = self.rooms.write().unwrap();
        rooms.remove(name);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut rooms = self.rooms.write().unwrap();
        rooms.clear();
        Ok(())
    }
}

// ============================================================================
// In-Memory Appointment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<HashMap<i64, Appointment>>>,
    next_id: AtomicI64,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an appointment for testing
    pub fn with_appointment(self, appointment: Appointment) -> Self {
        {
            let mut appointments = self.appointments.write().unwrap();
            self.next_id.fetch_max(appointment.id.0, Ordering::SeqCst);
            appointments.insert(appointment.id.0, appointment);
        }
        self
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut all: Vec<Appointment> = appointments.values().cloned().collect();
        all.sort_by_key(|a| a.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        Ok(appointments.get(&id.0).cloned())
    }

    async fn save(&self, new_appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let appointment = Appointment {
            id: AppointmentId(id),
            patient_id: new_appointment.patient_id,
            doctor_id: new_appointment.doctor_id,
            room_name: new_appointment.room_name.clone(),
            starts_at: new_appointment.starts_at,
            finishes_at: new_appointment.finishes_at,
        };

        let mut appointments = self.appointments.write().unwrap();
        appointments.insert(id, appointment.clone());
        Ok(appointment)
    }

    async fn delete_by_id(&self, id: &AppointmentId) -> Result<(), DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        appointments.remove(&id.0);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        appointments.clear();
        Ok(())
    }
}
