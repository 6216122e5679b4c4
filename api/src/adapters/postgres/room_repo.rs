//! PostgreSQL adapter for RoomRepository
//!
//! Rooms key on their name, so lookups and deletes go through the string
//! primary key. The table's check constraint rejects empty names at insert.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::Room;
use crate::domain::ports::RoomRepository;
use crate::entity::rooms;
use crate::error::DomainError;

/// PostgreSQL implementation of RoomRepository
pub struct PostgresRoomRepository {
    db: DatabaseConnection,
}

impl PostgresRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn find_all(&self) -> Result<Vec<Room>, DomainError> {
        let results = rooms::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Room>, DomainError> {
        let result = rooms::Entity::find_by_id(name.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, room: &Room) -> Result<Room, DomainError> {
        let model = rooms::ActiveModel {
            name: Set(room.name.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), DomainError> {
        rooms::Entity::delete_by_id(name.to_owned())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        rooms::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Room { name: model.name }
    }
}
