use mealguard_core::domain::recipe::{entities::CandidateRecipe, value_objects::MealType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const MAX_INGREDIENTS: usize = 200;
const MAX_INGREDIENTS_U64: u64 = MAX_INGREDIENTS as u64;

/// Candidate recipe submitted for assessment. Missing or `null` lists read as empty.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct AssessRecipeValidator {
    #[validate(length(max = 300, message = "title must be at most 300 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = MAX_INGREDIENTS_U64, message = "at most 200 ingredients are accepted"))]
    pub ingredients: Option<Vec<String>>,

    pub instructions: Option<Vec<String>>,

    #[validate(range(max = 1440, message = "prep_time_minutes must be at most 1440"))]
    pub prep_time_minutes: Option<u32>,

    #[validate(range(max = 1440, message = "cook_time_minutes must be at most 1440"))]
    pub cook_time_minutes: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "servings must be between 1 and 100"))]
    pub servings: Option<u32>,

    pub safety_notes: Option<Vec<String>>,
}

impl From<AssessRecipeValidator> for CandidateRecipe {
    fn from(payload: AssessRecipeValidator) -> Self {
        Self {
            title: payload.title.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            ingredients: payload.ingredients.unwrap_or_default(),
            instructions: payload.instructions.unwrap_or_default(),
            prep_time_minutes: payload.prep_time_minutes,
            cook_time_minutes: payload.cook_time_minutes,
            servings: payload.servings,
            safety_notes: payload.safety_notes.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    pub meal_type: MealType,

    #[validate(length(min = 1, max = 100, message = "cuisine must be 1 to 100 characters"))]
    pub cuisine: Option<String>,

    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetGeneratedRecipesParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}
