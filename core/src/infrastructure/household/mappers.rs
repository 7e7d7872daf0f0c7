use sea_orm::prelude::Json;
use uuid::Uuid;

use crate::{
    domain::household::entities::{
        AgeGroup, BudgetLevel, CookingSkill, FamilyMemberProfile, HouseholdProfile,
        pair_allergies,
    },
    entity::{family_members, user_preferences},
};

/// Reads a JSON array of strings. Anything else, including null, reads as empty.
pub fn json_strings(value: &Json) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl From<&family_members::Model> for FamilyMemberProfile {
    fn from(model: &family_members::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            age_group: AgeGroup::from(model.age_group.as_str()),
            dietary_restrictions: json_strings(&model.dietary_restrictions),
            allergies: pair_allergies(
                json_strings(&model.allergies),
                json_strings(&model.allergy_severities),
            ),
            dislikes: json_strings(&model.dislikes),
        }
    }
}

pub fn map_household(
    user_id: Uuid,
    preferences: &user_preferences::Model,
    members: &[family_members::Model],
) -> HouseholdProfile {
    HouseholdProfile {
        user_id,
        household_size: u32::try_from(preferences.household_size).unwrap_or(0),
        cooking_skill: CookingSkill::from(preferences.cooking_skill.as_str()),
        budget_level: BudgetLevel::from(preferences.budget_level.as_str()),
        cooking_time_minutes: u32::try_from(preferences.cooking_time_minutes).unwrap_or(0),
        dietary_restrictions: json_strings(&preferences.dietary_restrictions),
        allergies: pair_allergies(
            json_strings(&preferences.allergies),
            json_strings(&preferences.allergy_severities),
        ),
        dislikes: json_strings(&preferences.dislikes),
        family_members: members.iter().map(FamilyMemberProfile::from).collect(),
    }
}
