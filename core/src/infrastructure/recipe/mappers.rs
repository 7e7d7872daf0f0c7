use sea_orm::{ActiveValue::Set, prelude::Json};

use crate::{
    domain::recipe::entities::GeneratedRecipe,
    entity::generated_recipes::{ActiveModel, Model},
    infrastructure::household::mappers::json_strings,
};

impl From<&Model> for GeneratedRecipe {
    fn from(model: &Model) -> Self {
        let detected_allergens = serde_json::from_value(model.detected_allergens.clone())
            .unwrap_or_else(|e| {
                tracing::warn!(recipe_id = %model.id, "Unreadable detected_allergens: {}", e);
                Vec::new()
            });

        Self {
            id: model.id,
            user_id: model.user_id,
            meal_type: model.meal_type.clone(),
            title: model.title.clone(),
            description: model.description.clone(),
            ingredients: json_strings(&model.ingredients),
            instructions: json_strings(&model.instructions),
            prep_time_minutes: model.prep_time_minutes,
            cook_time_minutes: model.cook_time_minutes,
            servings: model.servings,
            detected_allergens,
            safety_warnings: json_strings(&model.safety_warnings),
            safety_score: model.safety_score.clamp(0, 100),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<Model> for GeneratedRecipe {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

pub fn to_active_model(recipe: &GeneratedRecipe) -> ActiveModel {
    ActiveModel {
        id: Set(recipe.id),
        user_id: Set(recipe.user_id),
        meal_type: Set(recipe.meal_type.clone()),
        title: Set(recipe.title.clone()),
        description: Set(recipe.description.clone()),
        ingredients: Set(Json::from(recipe.ingredients.clone())),
        instructions: Set(Json::from(recipe.instructions.clone())),
        prep_time_minutes: Set(recipe.prep_time_minutes),
        cook_time_minutes: Set(recipe.cook_time_minutes),
        servings: Set(recipe.servings),
        detected_allergens: Set(serde_json::to_value(&recipe.detected_allergens)
            .unwrap_or_else(|_| Json::Array(Vec::new()))),
        safety_warnings: Set(Json::from(recipe.safety_warnings.clone())),
        safety_score: Set(recipe.safety_score),
        created_at: Set(recipe.created_at.fixed_offset()),
    }
}
