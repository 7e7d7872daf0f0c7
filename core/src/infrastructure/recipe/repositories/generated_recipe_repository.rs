use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::GeneratedRecipe, ports::GeneratedRecipeRepository,
            value_objects::GetGeneratedRecipesFilter,
        },
    },
    entity::generated_recipes::{Column, Entity},
    infrastructure::recipe::mappers::to_active_model,
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct PostgresGeneratedRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresGeneratedRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl GeneratedRecipeRepository for PostgresGeneratedRecipeRepository {
    async fn create(&self, recipe: GeneratedRecipe) -> Result<GeneratedRecipe, CoreError> {
        let created = Entity::insert(to_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create generated recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(GeneratedRecipe::from(created))
    }

    async fn get_by_user_id(
        &self,
        user_id: Uuid,
        filter: GetGeneratedRecipesFilter,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let limit = filter.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

        let recipes = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit as u64)
            .offset(filter.offset.unwrap_or(0) as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get generated recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.iter().map(GeneratedRecipe::from).collect())
    }
}
