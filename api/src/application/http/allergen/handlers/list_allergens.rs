use axum::extract::State;
use mealguard_core::domain::allergen::{
    entities::{AllergenDefinition, RegulatoryCategory},
    lexicon::AllergenLexicon,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllergenEntry {
    pub id: String,
    pub display_name: String,
    pub display_icon: String,
    pub synonyms: Vec<String>,
    pub regulatory_category: RegulatoryCategory,
}

impl From<&AllergenDefinition> for AllergenEntry {
    fn from(definition: &AllergenDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            display_name: definition.display_name.to_string(),
            display_icon: definition.display_icon.to_string(),
            synonyms: definition.synonyms.iter().map(|s| s.to_string()).collect(),
            regulatory_category: definition.regulatory_category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListAllergensResponse {
    pub match_mode: String,
    pub data: Vec<AllergenEntry>,
}

impl From<&AllergenLexicon> for ListAllergensResponse {
    fn from(lexicon: &AllergenLexicon) -> Self {
        Self {
            match_mode: lexicon.mode().as_str().to_string(),
            data: lexicon.definitions().iter().map(AllergenEntry::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergen",
    summary = "List allergens",
    description = "Lists the allergen lexicon used for ingredient matching, major allergens first.",
    responses(
        (status = 200, body = ListAllergensResponse)
    )
)]
pub async fn list_allergens(
    State(state): State<AppState>,
) -> Result<Response<ListAllergensResponse>, ApiError> {
    Ok(Response::OK(ListAllergensResponse::from(
        state.service.pipeline().lexicon(),
    )))
}
