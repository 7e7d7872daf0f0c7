use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        household::{entities::HouseholdProfile, ports::HouseholdRepository},
    },
    entity::{family_members, user_preferences},
    infrastructure::household::mappers::map_household,
};

#[derive(Debug, Clone)]
pub struct PostgresHouseholdRepository {
    pub db: DatabaseConnection,
}

impl PostgresHouseholdRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HouseholdRepository for PostgresHouseholdRepository {
    async fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<HouseholdProfile>, CoreError> {
        let preferences = user_preferences::Entity::find()
            .filter(user_preferences::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user preferences: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(preferences) = preferences else {
            return Ok(None);
        };

        let members = family_members::Entity::find()
            .filter(family_members::Column::UserId.eq(user_id))
            .order_by_asc(family_members::Column::Position)
            .order_by_asc(family_members::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family members: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(map_household(user_id, &preferences, &members)))
    }
}
