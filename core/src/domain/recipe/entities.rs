use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::entities::DetectedAllergen, common::generate_timestamp,
    safety::value_objects::SafetyAssessment,
};

/// Unassessed recipe proposal as received from the generation collaborator.
/// Missing or `null` lists read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CandidateRecipe {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    /// Warnings the generator attached on its own.
    #[serde(deserialize_with = "null_as_empty")]
    pub safety_notes: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Generated recipe as persisted, with the flattened safety columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_type: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub detected_allergens: Vec<DetectedAllergen>,
    pub safety_warnings: Vec<String>,
    pub safety_score: i32, // 0-100
    pub created_at: DateTime<Utc>,
}

impl GeneratedRecipe {
    pub fn new(
        user_id: Uuid,
        meal_type: String,
        candidate: CandidateRecipe,
        assessment: &SafetyAssessment,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            meal_type,
            title: candidate.title,
            description: candidate.description,
            ingredients: candidate.ingredients,
            instructions: candidate.instructions,
            prep_time_minutes: candidate.prep_time_minutes.map(to_i32),
            cook_time_minutes: candidate.cook_time_minutes.map(to_i32),
            servings: candidate.servings.map(to_i32),
            detected_allergens: assessment.detected_allergens.clone(),
            safety_warnings: assessment.warnings.clone(),
            safety_score: i32::from(assessment.safety_score),
            created_at: now,
        }
    }

    pub fn total_time_minutes(&self) -> Option<i32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_ingredients_read_as_empty() {
        let candidate: CandidateRecipe =
            serde_json::from_str(r#"{"title": "Soup", "ingredients": null}"#).unwrap();

        assert_eq!(candidate.title, "Soup");
        assert!(candidate.ingredients.is_empty());
        assert!(candidate.safety_notes.is_empty());
    }

    #[test]
    fn test_missing_ingredients_read_as_empty() {
        let candidate: CandidateRecipe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(candidate, CandidateRecipe::default());
    }

    #[test]
    fn test_generated_recipe_copies_safety_columns() {
        let candidate = CandidateRecipe {
            title: "Pancakes".to_string(),
            ingredients: vec!["1 cup flour".to_string()],
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(15),
            ..Default::default()
        };
        let assessment = SafetyAssessment {
            detected_allergens: Vec::new(),
            warnings: vec!["disclaimer".to_string()],
            safety_score: 90,
            affected_members: Default::default(),
            dietary_conflicts: Vec::new(),
        };

        let recipe = GeneratedRecipe::new(
            Uuid::new_v4(),
            "breakfast".to_string(),
            candidate,
            &assessment,
        );

        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.safety_score, 90);
        assert_eq!(recipe.safety_warnings, vec!["disclaimer".to_string()]);
        assert_eq!(recipe.total_time_minutes(), Some(25));
    }
}
