use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::allergen::entities::SeverityLevel;

/// Name given to the implicit member built from a household's top-level fields.
pub const PRIMARY_MEMBER_NAME: &str = "You";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Teen,
    #[default]
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl From<&str> for AgeGroup {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "child" => AgeGroup::Child,
            "teen" => AgeGroup::Teen,
            "senior" => AgeGroup::Senior,
            _ => AgeGroup::Adult,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CookingSkill {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl CookingSkill {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingSkill::Beginner => "beginner",
            CookingSkill::Intermediate => "intermediate",
            CookingSkill::Advanced => "advanced",
        }
    }
}

impl From<&str> for CookingSkill {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => CookingSkill::Beginner,
            "advanced" => CookingSkill::Advanced,
            _ => CookingSkill::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

impl From<&str> for BudgetLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => BudgetLevel::Low,
            "high" => BudgetLevel::High,
            _ => BudgetLevel::Medium,
        }
    }
}

/// One declared allergy together with its severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MemberAllergy {
    pub allergen: String,
    pub severity: SeverityLevel,
}

impl MemberAllergy {
    pub fn new(allergen: impl Into<String>, severity: SeverityLevel) -> Self {
        Self {
            allergen: allergen.into(),
            severity,
        }
    }
}

/// Pairs stored parallel arrays. A severity missing at index i reads as mild;
/// surplus severities are dropped.
pub fn pair_allergies(allergies: Vec<String>, severities: Vec<String>) -> Vec<MemberAllergy> {
    let mut severities = severities.into_iter();

    allergies
        .into_iter()
        .map(|allergen| {
            let severity = severities
                .next()
                .map(|s| SeverityLevel::from(s.as_str()))
                .unwrap_or_default();
            MemberAllergy { allergen, severity }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FamilyMemberProfile {
    pub id: Uuid,
    pub name: String,
    pub age_group: AgeGroup,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<MemberAllergy>,
    pub dislikes: Vec<String>,
}

impl FamilyMemberProfile {
    pub fn is_vegetarian(&self) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|restriction| is_vegetarian_marker(restriction))
    }
}

const NEGATIONS: &[&str] = &["no", "not", "non", "never"];

// A negation word before the diet word ("not vegetarian", "no longer vegan") cancels it.
fn is_vegetarian_marker(restriction: &str) -> bool {
    let restriction = restriction.to_lowercase();
    let mut negated = false;

    for word in restriction
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if NEGATIONS.contains(&word) {
            negated = true;
        } else if word.contains("vegetarian") || word.contains("vegan") {
            return !negated && !word.starts_with("non");
        }
    }

    false
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HouseholdProfile {
    pub user_id: Uuid,
    pub household_size: u32,
    pub cooking_skill: CookingSkill,
    pub budget_level: BudgetLevel,
    pub cooking_time_minutes: u32,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<MemberAllergy>,
    pub dislikes: Vec<String>,
    pub family_members: Vec<FamilyMemberProfile>,
}

impl HouseholdProfile {
    /// True when no members are defined and the top-level fields describe the only eater.
    pub fn uses_primary_profile(&self) -> bool {
        self.family_members.is_empty()
    }

    pub fn primary_member(&self) -> FamilyMemberProfile {
        FamilyMemberProfile {
            id: self.user_id,
            name: PRIMARY_MEMBER_NAME.to_string(),
            age_group: AgeGroup::Adult,
            dietary_restrictions: self.dietary_restrictions.clone(),
            allergies: self.allergies.clone(),
            dislikes: self.dislikes.clone(),
        }
    }

    /// Members whose profiles constrain the meal.
    pub fn effective_members(&self) -> Vec<FamilyMemberProfile> {
        if self.uses_primary_profile() {
            vec![self.primary_member()]
        } else {
            self.family_members.clone()
        }
    }

    /// Every allergy declared by anyone the meal is for.
    pub fn declared_allergens(&self) -> BTreeSet<String> {
        self.effective_members()
            .iter()
            .flat_map(|member| member.allergies.iter())
            .map(|allergy| allergy.allergen.trim().to_string())
            .filter(|allergen| !allergen.is_empty())
            .collect()
    }

    pub fn declared_restrictions(&self) -> BTreeSet<String> {
        self.effective_members()
            .iter()
            .flat_map(|member| member.dietary_restrictions.iter())
            .map(|restriction| restriction.trim().to_string())
            .filter(|restriction| !restriction.is_empty())
            .collect()
    }

    pub fn declared_dislikes(&self) -> BTreeSet<String> {
        self.effective_members()
            .iter()
            .flat_map(|member| member.dislikes.iter())
            .map(|dislike| dislike.trim().to_lowercase())
            .filter(|dislike| !dislike.is_empty())
            .collect()
    }
}
