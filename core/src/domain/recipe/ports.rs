use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::GeneratedRecipe, value_objects::GetGeneratedRecipesFilter},
};

/// Repository trait for generated recipe records
#[cfg_attr(test, mockall::automock)]
pub trait GeneratedRecipeRepository: Send + Sync {
    fn create(
        &self,
        recipe: GeneratedRecipe,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn get_by_user_id(
        &self,
        user_id: Uuid,
        filter: GetGeneratedRecipesFilter,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;
}

/// Client for the external AI model that writes candidate recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerator: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
