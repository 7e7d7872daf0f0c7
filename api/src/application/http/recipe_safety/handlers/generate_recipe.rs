use axum::extract::{Path, State};
use mealguard_core::domain::{
    recipe::value_objects::GenerateRecipeInput,
    safety::{
        ports::RecipeSafetyService,
        value_objects::{AssessedRecipe, SafetyBand},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe_safety::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: AssessedRecipe,
    pub band: SafetyBand,
    pub has_critical_allergens: bool,
    pub total_time_minutes: Option<i32>,
}

impl From<AssessedRecipe> for GenerateRecipeResponse {
    fn from(assessed: AssessedRecipe) -> Self {
        Self {
            band: assessed.assessment.band(),
            has_critical_allergens: assessed.assessment.has_critical_allergens(),
            total_time_minutes: assessed.recipe.total_time_minutes(),
            data: assessed,
        }
    }
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe-safety",
    summary = "Generate a recipe",
    description = "Asks the recipe generator for a recipe that fits the household, assesses it and stores it.",
    responses(
        (status = 201, body = GenerateRecipeResponse),
        (status = 404, description = "No household profile for this user"),
        (status = 502, description = "Recipe generator failed or returned an unreadable recipe")
    ),
    params(
        ("user_id" = Uuid, Path, description = "Household owner id"),
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let assessed = state
        .service
        .generate_recipe(GenerateRecipeInput {
            user_id,
            meal_type: payload.meal_type,
            cuisine: payload.cuisine,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateRecipeResponse::from(assessed)))
}
