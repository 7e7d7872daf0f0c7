use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen::lexicon::normalize_allergen_key;

/// Ordered risk tier of a reaction. The derived ordering is relied upon:
/// aggregation and scoring always keep the maximum.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    #[default]
    Mild,
    Moderate,
    Severe,
    LifeThreatening,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
            SeverityLevel::LifeThreatening => "life_threatening",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
            SeverityLevel::LifeThreatening => "life threatening",
        }
    }

    /// Severe and life-threatening share the critical tier.
    pub fn is_critical(&self) -> bool {
        *self >= SeverityLevel::Severe
    }
}

// Stored severities are free text; anything unrecognised reads as mild.
impl From<&str> for SeverityLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "moderate" => SeverityLevel::Moderate,
            "severe" => SeverityLevel::Severe,
            "life_threatening" | "lifethreatening" | "anaphylactic" => {
                SeverityLevel::LifeThreatening
            }
            _ => SeverityLevel::Mild,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryCategory {
    Major,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllergenDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub display_icon: &'static str,
    pub synonyms: &'static [&'static str],
    /// Phrases that suppress a synonym hit when word-start matching is enabled.
    pub exclusions: &'static [&'static str],
    pub regulatory_category: RegulatoryCategory,
}

impl AllergenDefinition {
    /// Whether a normalized declaration names this allergen by id or by one of its synonyms.
    pub fn is_named_by(&self, declared_key: &str) -> bool {
        !declared_key.is_empty()
            && (self.id == declared_key
                || self
                    .synonyms
                    .iter()
                    .any(|synonym| normalize_allergen_key(synonym) == declared_key))
    }
}

/// How a detection was established. Carried for display, never scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// The allergen is declared by someone in the household.
    Declared,
    /// Lexicon hit only.
    #[default]
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetectedAllergen {
    pub allergen_id: String,
    // Older stored rows predate these two fields.
    #[serde(default)]
    pub matched_synonym: String,
    #[serde(default)]
    pub confidence: MatchConfidence,
    pub severity: SeverityLevel,
    pub warning_text: String,
}

impl DetectedAllergen {
    pub fn new(
        definition: &AllergenDefinition,
        matched_synonym: &str,
        confidence: MatchConfidence,
        severity: SeverityLevel,
    ) -> Self {
        Self {
            allergen_id: definition.id.to_string(),
            matched_synonym: matched_synonym.to_string(),
            confidence,
            severity,
            warning_text: detection_warning_text(
                definition.display_name,
                matched_synonym,
                severity,
            ),
        }
    }

    /// Raises the severity to `severity` if it is higher. Returns whether anything changed.
    pub fn escalate(&mut self, severity: SeverityLevel, display_name: &str) -> bool {
        if severity <= self.severity {
            return false;
        }

        let crosses_tier = severity.is_critical() && !self.severity.is_critical();
        self.severity = severity;
        self.confidence = MatchConfidence::Declared;
        if crosses_tier {
            self.warning_text =
                detection_warning_text(display_name, &self.matched_synonym, severity);
        }

        true
    }
}

fn detection_warning_text(
    display_name: &str,
    matched_synonym: &str,
    severity: SeverityLevel,
) -> String {
    if severity.is_critical() {
        format!(
            "CRITICAL: contains {} (\"{}\"), a declared allergen in this household. Do not serve without a safe substitute.",
            display_name, matched_synonym
        )
    } else {
        format!(
            "Contains {} (\"{}\"). Please verify ingredients before serving.",
            display_name, matched_synonym
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> AllergenDefinition {
        AllergenDefinition {
            id: "milk",
            display_name: "Milk",
            display_icon: "🥛",
            synonyms: &["milk"],
            exclusions: &[],
            regulatory_category: RegulatoryCategory::Major,
        }
    }

    #[test]
    fn test_severity_total_order() {
        assert!(SeverityLevel::Mild < SeverityLevel::Moderate);
        assert!(SeverityLevel::Moderate < SeverityLevel::Severe);
        assert!(SeverityLevel::Severe < SeverityLevel::LifeThreatening);
        assert_eq!(
            SeverityLevel::Moderate.max(SeverityLevel::LifeThreatening),
            SeverityLevel::LifeThreatening
        );
    }

    #[test]
    fn test_severity_parse_is_lenient() {
        assert_eq!(
            SeverityLevel::from("Life Threatening"),
            SeverityLevel::LifeThreatening
        );
        assert_eq!(
            SeverityLevel::from("life-threatening"),
            SeverityLevel::LifeThreatening
        );
        assert_eq!(SeverityLevel::from("SEVERE"), SeverityLevel::Severe);
        assert_eq!(SeverityLevel::from(""), SeverityLevel::Mild);
        assert_eq!(SeverityLevel::from("unknown"), SeverityLevel::Mild);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&SeverityLevel::LifeThreatening).unwrap();
        assert_eq!(json, "\"life_threatening\"");
    }

    #[test]
    fn test_escalate_never_downgrades() {
        let mut detected = DetectedAllergen::new(
            &milk(),
            "milk",
            MatchConfidence::Declared,
            SeverityLevel::LifeThreatening,
        );

        assert!(!detected.escalate(SeverityLevel::Mild, "Milk"));
        assert_eq!(detected.severity, SeverityLevel::LifeThreatening);
    }

    #[test]
    fn test_escalate_into_critical_rewrites_warning() {
        let mut detected = DetectedAllergen::new(
            &milk(),
            "milk",
            MatchConfidence::Heuristic,
            SeverityLevel::Moderate,
        );
        assert!(!detected.warning_text.starts_with("CRITICAL"));

        assert!(detected.escalate(SeverityLevel::Severe, "Milk"));
        assert_eq!(detected.severity, SeverityLevel::Severe);
        assert_eq!(detected.confidence, MatchConfidence::Declared);
        assert!(detected.warning_text.starts_with("CRITICAL"));
    }
}
