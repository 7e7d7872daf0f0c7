use crate::application::http::{
    allergen::router::AllergenApiDoc, health::HealthApiDoc,
    recipe_safety::router::RecipeSafetyApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealguard API"
    ),
    nest(
        (path = "/households/{user_id}/recipes", api = RecipeSafetyApiDoc),
        (path = "/allergens", api = AllergenApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
