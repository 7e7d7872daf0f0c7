use axum::extract::{Path, State};
use mealguard_core::domain::{
    recipe::entities::CandidateRecipe,
    safety::{
        ports::RecipeSafetyService,
        value_objects::{AssessRecipeInput, SafetyAssessment, SafetyBand},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe_safety::validators::AssessRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssessRecipeResponse {
    pub data: SafetyAssessment,
    pub band: SafetyBand,
    pub has_critical_allergens: bool,
}

impl From<SafetyAssessment> for AssessRecipeResponse {
    fn from(assessment: SafetyAssessment) -> Self {
        Self {
            band: assessment.band(),
            has_critical_allergens: assessment.has_critical_allergens(),
            data: assessment,
        }
    }
}

#[utoipa::path(
    post,
    path = "/assess",
    tag = "recipe-safety",
    summary = "Assess a recipe",
    description = "Scores a candidate recipe against the household's declared allergies and dietary needs. Nothing is stored.",
    responses(
        (status = 200, body = AssessRecipeResponse),
        (status = 404, description = "No household profile for this user")
    ),
    params(
        ("user_id" = Uuid, Path, description = "Household owner id"),
    ),
    request_body = AssessRecipeValidator
)]
pub async fn assess_recipe(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AssessRecipeValidator>,
) -> Result<Response<AssessRecipeResponse>, ApiError> {
    let assessment = state
        .service
        .assess_recipe(AssessRecipeInput {
            user_id,
            candidate: CandidateRecipe::from(payload),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AssessRecipeResponse::from(assessment)))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use mealguard_core::domain::{
        allergen::entities::SeverityLevel,
        household::entities::{HouseholdProfile, MemberAllergy},
        safety::pipeline::assess,
    };

    use super::*;

    #[test]
    fn test_band_follows_score() {
        let response = AssessRecipeResponse::from(SafetyAssessment {
            detected_allergens: Vec::new(),
            warnings: Vec::new(),
            safety_score: 75,
            affected_members: BTreeMap::new(),
            dietary_conflicts: Vec::new(),
        });

        assert_eq!(response.band, SafetyBand::Caution);
        assert_eq!(response.data.safety_score, 75);
        assert!(!response.has_critical_allergens);
    }

    #[test]
    fn test_critical_flag_follows_detections() {
        let household = HouseholdProfile {
            allergies: vec![MemberAllergy::new("milk", SeverityLevel::Severe)],
            ..Default::default()
        };
        let candidate = CandidateRecipe {
            ingredients: vec!["1 cup milk".to_string()],
            ..Default::default()
        };

        let response = AssessRecipeResponse::from(assess(&candidate, &household));

        assert!(response.has_critical_allergens);
        assert_eq!(response.data.safety_score, 70);
        assert_eq!(response.band, SafetyBand::Caution);
    }
}
