use super::handlers::list_allergens::{__path_list_allergens, list_allergens};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_allergens))]
pub struct AllergenApiDoc;

pub fn allergen_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/allergens", root_path), get(list_allergens))
}
