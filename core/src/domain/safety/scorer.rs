use std::collections::BTreeMap;

use crate::domain::{
    allergen::{
        entities::{DetectedAllergen, SeverityLevel},
        lexicon::AllergenLexicon,
    },
    safety::value_objects::MemberRisk,
};

pub const MAX_SCORE: i32 = 100;
pub const CRITICAL_ALLERGEN_PENALTY: i32 = 30;
pub const GENERAL_ALLERGEN_PENALTY: i32 = 10;
pub const UNRESOLVED_WARNING_PENALTY: i32 = 5;

pub const AI_DISCLAIMER: &str =
    "AI-generated recipe: verify all ingredients and check product labels before cooking.";

/// Additive penalty model. Severe and life-threatening share the 30-point tier,
/// every other severity costs 10. Each allergen id counts once at its highest severity.
pub fn score(detected: &[DetectedAllergen], has_unresolved_warnings: bool) -> u8 {
    let mut distinct: BTreeMap<&str, SeverityLevel> = BTreeMap::new();
    for detection in detected {
        let severity = distinct
            .entry(detection.allergen_id.as_str())
            .or_insert(detection.severity);
        *severity = (*severity).max(detection.severity);
    }

    let penalty: i32 = distinct
        .values()
        .map(|severity| {
            if severity.is_critical() {
                CRITICAL_ALLERGEN_PENALTY
            } else {
                GENERAL_ALLERGEN_PENALTY
            }
        })
        .sum();

    let unresolved = if has_unresolved_warnings {
        UNRESOLVED_WARNING_PENALTY
    } else {
        0
    };

    (MAX_SCORE - penalty - unresolved).clamp(0, MAX_SCORE) as u8
}

// Words a disclaimer may carry after its "AI-generated" opener without saying anything specific.
const DISCLAIMER_VOCABULARY: &[&str] = &[
    "recipe", "please", "verify", "double", "check", "all", "the", "ingredients", "ingredient",
    "product", "products", "labels", "label", "for", "allergens", "before", "cooking", "serving",
    "and", "carefully",
];

/// Whether generator-supplied notes carry anything beyond the standard AI disclaimer.
pub fn has_unresolved_warnings(safety_notes: &[String]) -> bool {
    safety_notes
        .iter()
        .any(|note| !note.trim().is_empty() && !is_disclaimer(note))
}

/// A disclaimer opens with "AI-generated" and adds only generic verification advice.
fn is_disclaimer(note: &str) -> bool {
    let note = note.to_lowercase();
    let mut words = note
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty());

    matches!((words.next(), words.next()), (Some("ai"), Some("generated")))
        && words.all(|word| DISCLAIMER_VOCABULARY.contains(&word))
}

/// Builds the ordered warning list: critical, general, per member, then the disclaimer.
pub fn generate_warnings(
    lexicon: &AllergenLexicon,
    detected: &[DetectedAllergen],
    per_member_matches: &[MemberRisk],
) -> Vec<String> {
    let mut warnings = Vec::new();

    let (critical, general): (Vec<&DetectedAllergen>, Vec<&DetectedAllergen>) = detected
        .iter()
        .partition(|detection| detection.severity.is_critical());

    if !critical.is_empty() {
        warnings.push(format!(
            "CRITICAL ALLERGEN WARNING: this recipe contains {}, declared as dangerous for your household. Do not serve without a safe substitute.",
            allergen_names(lexicon, &critical)
        ));
    }

    if !general.is_empty() {
        warnings.push(format!(
            "Contains common allergens: {}. Please verify ingredients if anyone is sensitive.",
            allergen_names(lexicon, &general)
        ));
    }

    for risk in per_member_matches
        .iter()
        .filter(|risk| !risk.is_primary_profile && !risk.matches.is_empty())
    {
        let allergens = risk
            .matches
            .iter()
            .map(|m| {
                format!(
                    "{} ({})",
                    lexicon.display_name(&m.allergen_id),
                    m.declared_severity.label()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        warnings.push(format!(
            "{} is allergic to {} in this recipe.",
            risk.member.name, allergens
        ));
    }

    warnings.push(AI_DISCLAIMER.to_string());
    warnings
}

fn allergen_names(lexicon: &AllergenLexicon, detected: &[&DetectedAllergen]) -> String {
    detected
        .iter()
        .map(|detection| lexicon.display_name(&detection.allergen_id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        allergen::entities::MatchConfidence,
        household::entities::FamilyMemberProfile,
        safety::value_objects::MemberAllergenMatch,
    };

    fn detection(allergen_id: &str, severity: SeverityLevel) -> DetectedAllergen {
        DetectedAllergen {
            allergen_id: allergen_id.to_string(),
            matched_synonym: allergen_id.to_string(),
            confidence: MatchConfidence::Heuristic,
            severity,
            warning_text: String::new(),
        }
    }

    fn risk(name: &str, allergen_id: &str, is_primary_profile: bool) -> MemberRisk {
        MemberRisk {
            member: FamilyMemberProfile {
                id: Uuid::new_v4(),
                name: name.to_string(),
                ..Default::default()
            },
            is_primary_profile,
            matches: vec![MemberAllergenMatch {
                allergen_id: allergen_id.to_string(),
                declared_allergy: allergen_id.to_string(),
                declared_severity: SeverityLevel::LifeThreatening,
            }],
        }
    }

    #[test]
    fn test_score_two_moderate_allergens() {
        let detected = vec![
            detection("milk", SeverityLevel::Moderate),
            detection("wheat", SeverityLevel::Moderate),
        ];
        assert_eq!(score(&detected, false), 80);
    }

    #[test]
    fn test_score_critical_and_moderate() {
        let detected = vec![
            detection("milk", SeverityLevel::LifeThreatening),
            detection("wheat", SeverityLevel::Moderate),
        ];
        assert_eq!(score(&detected, false), 60);
    }

    #[test]
    fn test_score_severe_costs_the_same_as_life_threatening() {
        assert_eq!(
            score(&[detection("soy", SeverityLevel::Severe)], false),
            score(&[detection("soy", SeverityLevel::LifeThreatening)], false)
        );
    }

    #[test]
    fn test_score_mild_costs_the_same_as_moderate() {
        assert_eq!(score(&[detection("soy", SeverityLevel::Mild)], false), 90);
    }

    #[test]
    fn test_score_unresolved_warning_penalty() {
        assert_eq!(score(&[], false), 100);
        assert_eq!(score(&[], true), 95);
    }

    #[test]
    fn test_score_counts_each_allergen_once_at_max_severity() {
        let detected = vec![
            detection("milk", SeverityLevel::Moderate),
            detection("milk", SeverityLevel::LifeThreatening),
        ];
        assert_eq!(score(&detected, false), 70);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let detected: Vec<DetectedAllergen> = (0..50)
            .map(|i| detection(&format!("allergen_{}", i), SeverityLevel::LifeThreatening))
            .collect();
        assert_eq!(score(&detected, true), 0);
    }

    #[test]
    fn test_has_unresolved_warnings_ignores_disclaimer() {
        assert!(!has_unresolved_warnings(&[]));
        assert!(!has_unresolved_warnings(&[
            "AI-generated recipe, please double check.".to_string(),
            "  ".to_string(),
        ]));
        assert!(has_unresolved_warnings(&[
            "Contains hidden fish sauce.".to_string()
        ]));
    }

    #[test]
    fn test_has_unresolved_warnings_only_dismisses_plain_disclaimers() {
        assert!(!has_unresolved_warnings(&[AI_DISCLAIMER.to_string()]));
        assert!(!has_unresolved_warnings(&[
            "AI generated: verify all product labels.".to_string()
        ]));
        assert!(has_unresolved_warnings(&[
            "This AI-generated recipe uses stock cubes that may contain celery.".to_string()
        ]));
        assert!(has_unresolved_warnings(&[
            "AI-generated recipe: the pesto may contain pine nuts.".to_string()
        ]));
    }

    #[test]
    fn test_warnings_only_disclaimer_when_nothing_detected() {
        let warnings = generate_warnings(&AllergenLexicon::default(), &[], &[]);
        assert_eq!(warnings, vec![AI_DISCLAIMER.to_string()]);
    }

    #[test]
    fn test_warnings_order() {
        let lexicon = AllergenLexicon::default();
        let detected = vec![
            detection("wheat", SeverityLevel::Moderate),
            detection("peanuts", SeverityLevel::LifeThreatening),
            detection("soy", SeverityLevel::Moderate),
        ];
        let warnings = generate_warnings(&lexicon, &detected, &[risk("Ana", "peanuts", false)]);

        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].starts_with("CRITICAL ALLERGEN WARNING"));
        assert!(warnings[0].contains("Peanuts"));
        assert!(warnings[1].contains("Wheat/Gluten, Soy"));
        assert_eq!(
            warnings[2],
            "Ana is allergic to Peanuts (life threatening) in this recipe."
        );
        assert_eq!(warnings[3], AI_DISCLAIMER);
    }

    #[test]
    fn test_warnings_skip_primary_profile_sentence() {
        let lexicon = AllergenLexicon::default();
        let detected = vec![detection("milk", SeverityLevel::LifeThreatening)];
        let warnings = generate_warnings(&lexicon, &detected, &[risk("You", "milk", true)]);

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("CRITICAL"));
        assert_eq!(warnings[1], AI_DISCLAIMER);
    }
}
