use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::entities::{DetectedAllergen, SeverityLevel},
    household::entities::FamilyMemberProfile,
    recipe::entities::{CandidateRecipe, GeneratedRecipe},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberAllergenMatch {
    pub allergen_id: String,
    /// The allergy exactly as the member declared it.
    pub declared_allergy: String,
    pub declared_severity: SeverityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberRisk {
    pub member: FamilyMemberProfile,
    /// Set for the implicit member built from top-level household fields.
    pub is_primary_profile: bool,
    pub matches: Vec<MemberAllergenMatch>,
}

/// Output of the family risk aggregation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRiskReport {
    /// Detections after member-declared escalation.
    pub detected: Vec<DetectedAllergen>,
    /// Members with at least one match, in household order.
    pub per_member_matches: Vec<MemberRisk>,
    pub affected_members: BTreeMap<String, Vec<FamilyMemberProfile>>,
    pub dietary_conflicts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafetyAssessment {
    pub detected_allergens: Vec<DetectedAllergen>,
    pub warnings: Vec<String>,
    pub safety_score: u8, // 0-100
    pub affected_members: BTreeMap<String, Vec<FamilyMemberProfile>>,
    pub dietary_conflicts: Vec<String>,
}

impl SafetyAssessment {
    pub fn band(&self) -> SafetyBand {
        SafetyBand::from_score(self.safety_score)
    }

    pub fn has_critical_allergens(&self) -> bool {
        self.detected_allergens
            .iter()
            .any(|detected| detected.severity.is_critical())
    }
}

/// Display tier for a safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SafetyBand {
    Good,
    Caution,
    Poor,
}

impl SafetyBand {
    pub const GOOD_THRESHOLD: u8 = 90;
    pub const CAUTION_THRESHOLD: u8 = 70;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::GOOD_THRESHOLD {
            SafetyBand::Good
        } else if score >= Self::CAUTION_THRESHOLD {
            SafetyBand::Caution
        } else {
            SafetyBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyBand::Good => "good",
            SafetyBand::Caution => "caution",
            SafetyBand::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssessRecipeInput {
    pub user_id: Uuid,
    pub candidate: CandidateRecipe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssessedRecipe {
    pub recipe: GeneratedRecipe,
    pub assessment: SafetyAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SafetyBand::from_score(100), SafetyBand::Good);
        assert_eq!(SafetyBand::from_score(90), SafetyBand::Good);
        assert_eq!(SafetyBand::from_score(89), SafetyBand::Caution);
        assert_eq!(SafetyBand::from_score(70), SafetyBand::Caution);
        assert_eq!(SafetyBand::from_score(69), SafetyBand::Poor);
        assert_eq!(SafetyBand::from_score(0), SafetyBand::Poor);
    }
}
