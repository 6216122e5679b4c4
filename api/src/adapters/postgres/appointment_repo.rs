//! PostgreSQL adapter for AppointmentRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{Appointment, AppointmentId, DoctorId, NewAppointment, PatientId};
use crate::domain::ports::AppointmentRepository;
use crate::entity::appointments;
use crate::error::DomainError;

/// PostgreSQL implementation of AppointmentRepository
pub struct PostgresAppointmentRepository {
    db: DatabaseConnection,
}

impl PostgresAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let result = appointments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let model = appointments::ActiveModel {
            patient_id: Set(appointment.patient_id.0),
            doctor_id: Set(appointment.doctor_id.0),
            room_name: Set(appointment.room_name.clone()),
            starts_at: Set(appointment.starts_at),
            finishes_at: Set(appointment.finishes_at),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &AppointmentId) -> Result<(), DomainError> {
        appointments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        appointments::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<appointments::Model> for Appointment {
    fn from(model: appointments::Model) -> Self {
        Appointment {
            id: AppointmentId(model.id),
            patient_id: PatientId(model.patient_id),
            doctor_id: DoctorId(model.doctor_id),
            room_name: model.room_name,
            starts_at: model.starts_at,
            finishes_at: model.finishes_at,
        }
    }
}
