use super::handlers::{
    assess_recipe::{__path_assess_recipe, assess_recipe},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_generated_recipes::{__path_get_generated_recipes, get_generated_recipes},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(assess_recipe, generate_recipe, get_generated_recipes))]
pub struct RecipeSafetyApiDoc;

pub fn recipe_safety_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/households/{{user_id}}/recipes/assess", root_path),
            post(assess_recipe),
        )
        .route(
            &format!("{}/households/{{user_id}}/recipes/generate", root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/households/{{user_id}}/recipes", root_path),
            get(get_generated_recipes),
        )
}
