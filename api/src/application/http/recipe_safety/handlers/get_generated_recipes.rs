use axum::extract::{Path, Query, State};
use mealguard_core::domain::{
    recipe::{entities::GeneratedRecipe, value_objects::GetGeneratedRecipesInput},
    safety::ports::RecipeSafetyService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    recipe_safety::validators::GetGeneratedRecipesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetGeneratedRecipesResponse {
    pub data: Vec<GeneratedRecipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe-safety",
    summary = "List generated recipes",
    description = "Lists the household's stored recipes with their safety columns, newest first.",
    responses(
        (status = 200, body = GetGeneratedRecipesResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Household owner id"),
        GetGeneratedRecipesParams
    ),
)]
pub async fn get_generated_recipes(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Query(params): Query<GetGeneratedRecipesParams>,
) -> Result<Response<GetGeneratedRecipesResponse>, ApiError> {
    params.validate()?;

    let recipes = state
        .service
        .get_generated_recipes(GetGeneratedRecipesInput {
            user_id,
            offset: params.offset,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGeneratedRecipesResponse { data: recipes }))
}
