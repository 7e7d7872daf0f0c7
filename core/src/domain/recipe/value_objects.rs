use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub user_id: Uuid,
    pub meal_type: MealType,
    pub cuisine: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetGeneratedRecipesInput {
    pub user_id: Uuid,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GetGeneratedRecipesFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
