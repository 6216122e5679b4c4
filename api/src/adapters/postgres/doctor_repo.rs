//! PostgreSQL adapter for DoctorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{Doctor, DoctorId, NewDoctor};
use crate::domain::ports::DoctorRepository;
use crate::entity::doctors;
use crate::error::DomainError;

/// PostgreSQL implementation of DoctorRepository
pub struct PostgresDoctorRepository {
    db: DatabaseConnection,
}

impl PostgresDoctorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn find_all(&self) -> Result<Vec<Doctor>, DomainError> {
        let results = doctors::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DomainError> {
        let result = doctors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, doctor: &NewDoctor) -> Result<Doctor, DomainError> {
        let model = doctors::ActiveModel {
            first_name: Set(doctor.first_name.clone()),
            last_name: Set(doctor.last_name.clone()),
            age: Set(doctor.age),
            email: Set(doctor.email.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &DoctorId) -> Result<(), DomainError> {
        doctors::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        doctors::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<doctors::Model> for Doctor {
    fn from(model: doctors::Model) -> Self {
        Doctor {
            id: DoctorId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            age: model.age,
            email: model.email,
        }
    }
}
