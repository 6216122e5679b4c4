//! PostgreSQL adapter for PatientRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{NewPatient, Patient, PatientId};
use crate::domain::ports::PatientRepository;
use crate::entity::patients;
use crate::error::DomainError;

/// PostgreSQL implementation of PatientRepository
pub struct PostgresPatientRepository {
    db: DatabaseConnection,
}

impl PostgresPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn find_all(&self) -> Result<Vec<Patient>, DomainError> {
        let results = patients::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &PatientId) -> Result<Option<Patient>, DomainError> {
        let result = patients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, patient: &NewPatient) -> Result<Patient, DomainError> {
        let model = patients::ActiveModel {
            first_name: Set(patient.first_name.clone()),
            last_name: Set(patient.last_name.clone()),
            age: Set(patient.age),
            email: Set(patient.email.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &PatientId) -> Result<(), DomainError> {
        patients::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        patients::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<patients::Model> for Patient {
    fn from(model: patients::Model) -> Self {
        Patient {
            id: PatientId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            age: model.age,
            email: model.email,
        }
    }
}
