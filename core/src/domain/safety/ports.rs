use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::GeneratedRecipe,
        value_objects::{GenerateRecipeInput, GetGeneratedRecipesInput},
    },
    safety::value_objects::{AssessRecipeInput, AssessedRecipe, SafetyAssessment},
};

/// Household-aware recipe safety operations exposed to the integration layer.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSafetyService: Send + Sync {
    fn assess_recipe(
        &self,
        input: AssessRecipeInput,
    ) -> impl Future<Output = Result<SafetyAssessment, CoreError>> + Send;

    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<AssessedRecipe, CoreError>> + Send;

    fn get_generated_recipes(
        &self,
        input: GetGeneratedRecipesInput,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;
}
