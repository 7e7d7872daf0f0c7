use crate::domain::{
    allergen::{detector::AllergenDetector, lexicon::AllergenLexicon},
    household::entities::HouseholdProfile,
    recipe::entities::CandidateRecipe,
    safety::{
        aggregator::FamilyRiskAggregator,
        scorer::{generate_warnings, has_unresolved_warnings, score},
        value_objects::SafetyAssessment,
    },
};

/// Detector, aggregator and scorer composed over one shared lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeSafetyPipeline {
    detector: AllergenDetector,
    aggregator: FamilyRiskAggregator,
}

impl RecipeSafetyPipeline {
    pub const fn new(lexicon: AllergenLexicon) -> Self {
        Self {
            detector: AllergenDetector::new(lexicon),
            aggregator: FamilyRiskAggregator::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &AllergenLexicon {
        self.detector.lexicon()
    }

    /// Pure and deterministic. Always yields an assessment.
    pub fn assess(
        &self,
        candidate: &CandidateRecipe,
        household: &HouseholdProfile,
    ) -> SafetyAssessment {
        let known_allergens = household.declared_allergens();
        let detected = self.detector.detect(&candidate.ingredients, &known_allergens);
        tracing::debug!(
            ingredients = candidate.ingredients.len(),
            detected = detected.len(),
            "allergens detected"
        );

        let report = self.aggregator.aggregate(detected, household);

        let unresolved = has_unresolved_warnings(&candidate.safety_notes);
        let safety_score = score(&report.detected, unresolved);
        let warnings = generate_warnings(
            self.lexicon(),
            &report.detected,
            &report.per_member_matches,
        );
        tracing::debug!(safety_score, warnings = warnings.len(), "recipe scored");

        SafetyAssessment {
            detected_allergens: report.detected,
            warnings,
            safety_score,
            affected_members: report.affected_members,
            dietary_conflicts: report.dietary_conflicts,
        }
    }
}

/// Assesses with the default lexicon.
pub fn assess(candidate: &CandidateRecipe, household: &HouseholdProfile) -> SafetyAssessment {
    RecipeSafetyPipeline::default().assess(candidate, household)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        allergen::{entities::SeverityLevel, lexicon::ALLERGENS},
        household::entities::{FamilyMemberProfile, MemberAllergy},
        safety::scorer::AI_DISCLAIMER,
    };

    fn candidate(ingredients: &[&str]) -> CandidateRecipe {
        CandidateRecipe {
            title: "Test".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn member(
        name: &str,
        allergies: Vec<MemberAllergy>,
        restrictions: &[&str],
    ) -> FamilyMemberProfile {
        FamilyMemberProfile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            allergies,
            dietary_restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_household_two_moderate_allergens() {
        let assessment = assess(
            &candidate(&["2 cups whole milk", "1 cup flour"]),
            &HouseholdProfile::default(),
        );

        let ids: Vec<&str> = assessment
            .detected_allergens
            .iter()
            .map(|d| d.allergen_id.as_str())
            .collect();
        assert_eq!(ids, vec!["milk", "wheat"]);
        assert!(
            assessment
                .detected_allergens
                .iter()
                .all(|d| d.severity == SeverityLevel::Moderate)
        );
        assert_eq!(assessment.safety_score, 80);
    }

    #[test]
    fn test_declared_allergen_escalates() {
        let household = HouseholdProfile {
            allergies: vec![MemberAllergy::new("milk", SeverityLevel::Mild)],
            ..Default::default()
        };

        let assessment = assess(&candidate(&["2 cups whole milk", "1 cup flour"]), &household);

        assert_eq!(
            assessment.detected_allergens[0].severity,
            SeverityLevel::LifeThreatening
        );
        assert_eq!(assessment.safety_score, 60);
        assert!(assessment.has_critical_allergens());
    }

    #[test]
    fn test_only_allergic_member_gets_a_sentence() {
        let ana = member(
            "Ana",
            vec![MemberAllergy::new("peanuts", SeverityLevel::LifeThreatening)],
            &[],
        );
        let ben = member("Ben", Vec::new(), &[]);
        let household = HouseholdProfile {
            family_members: vec![ana.clone(), ben],
            ..Default::default()
        };

        let assessment = assess(&candidate(&["peanut butter"]), &household);

        assert_eq!(assessment.detected_allergens.len(), 1);
        assert_eq!(assessment.detected_allergens[0].allergen_id, "peanuts");
        assert_eq!(
            assessment.detected_allergens[0].severity,
            SeverityLevel::LifeThreatening
        );
        assert_eq!(assessment.affected_members["peanuts"], vec![ana]);
        assert!(assessment.warnings.iter().any(|w| w.starts_with("Ana ")));
        assert!(!assessment.warnings.iter().any(|w| w.contains("Ben")));
    }

    #[test]
    fn test_empty_ingredients_only_disclaimer() {
        let assessment = assess(&candidate(&[]), &HouseholdProfile::default());

        assert!(assessment.detected_allergens.is_empty());
        assert_eq!(assessment.warnings, vec![AI_DISCLAIMER.to_string()]);
        assert_eq!(assessment.safety_score, 100);
    }

    #[test]
    fn test_mixed_diet_conflict_does_not_affect_score() {
        let household = HouseholdProfile {
            family_members: vec![
                member("Ana", Vec::new(), &["vegetarian"]),
                member("Ben", Vec::new(), &[]),
            ],
            ..Default::default()
        };

        let assessment = assess(&candidate(&["rice", "carrots"]), &household);

        assert_eq!(assessment.dietary_conflicts.len(), 1);
        assert_eq!(assessment.safety_score, 100);
    }

    #[test]
    fn test_null_ingredients_match_empty_list() {
        let malformed: CandidateRecipe =
            serde_json::from_str(r#"{"title": "Test", "ingredients": null}"#)
                .expect("candidate should deserialize");
        let household = HouseholdProfile::default();

        assert_eq!(
            assess(&malformed, &household),
            assess(&candidate(&[]), &household)
        );
    }

    #[test]
    fn test_same_allergen_from_three_ingredients_is_one_detection() {
        let assessment = assess(
            &candidate(&["1 cup milk", "2 tbsp cream", "grated parmesan cheese"]),
            &HouseholdProfile::default(),
        );

        assert_eq!(assessment.detected_allergens.len(), 1);
        assert_eq!(assessment.safety_score, 90);
    }

    #[test]
    fn test_unresolved_generator_note_costs_five() {
        let mut recipe = candidate(&["rice"]);
        recipe.safety_notes = vec![
            "AI-generated recipe, verify labels.".to_string(),
            "Stock cubes may contain celery.".to_string(),
        ];

        let assessment = assess(&recipe, &HouseholdProfile::default());
        assert_eq!(assessment.safety_score, 95);
    }

    #[test]
    fn test_disclaimer_wording_inside_a_real_note_still_costs_five() {
        let mut recipe = candidate(&["rice"]);
        recipe.safety_notes =
            vec!["This AI-generated recipe uses stock cubes that may contain celery.".to_string()];

        let assessment = assess(&recipe, &HouseholdProfile::default());
        assert_eq!(assessment.safety_score, 95);
    }

    #[test]
    fn test_synonym_declaration_gets_member_sentence() {
        let ana = member(
            "Ana",
            vec![MemberAllergy::new("gluten", SeverityLevel::LifeThreatening)],
            &[],
        );
        let household = HouseholdProfile {
            family_members: vec![ana.clone(), member("Ben", Vec::new(), &[])],
            ..Default::default()
        };

        let assessment = assess(&candidate(&["1 cup flour"]), &household);

        assert_eq!(assessment.affected_members["wheat"], vec![ana]);
        assert!(
            assessment
                .warnings
                .iter()
                .any(|w| w.starts_with("Ana is allergic to Wheat"))
        );
        assert_eq!(assessment.safety_score, 70);
    }

    #[test]
    fn test_empty_household_matches_single_member_household() {
        let top_level = HouseholdProfile {
            allergies: vec![MemberAllergy::new("nuts", SeverityLevel::Mild)],
            ..Default::default()
        };
        let single_member = HouseholdProfile {
            family_members: vec![member(
                "Ana",
                vec![MemberAllergy::new("nuts", SeverityLevel::Mild)],
                &[],
            )],
            ..Default::default()
        };
        let recipe = candidate(&["almond flour", "honey"]);

        let a = assess(&recipe, &top_level);
        let b = assess(&recipe, &single_member);

        assert_eq!(a.detected_allergens, b.detected_allergens);
        assert_eq!(a.safety_score, b.safety_score);
        assert_eq!(
            a.affected_members.keys().collect::<Vec<_>>(),
            b.affected_members.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_parallel_assessments_agree() {
        let pipeline = RecipeSafetyPipeline::default();
        let household = HouseholdProfile {
            allergies: vec![MemberAllergy::new("sesame", SeverityLevel::Severe)],
            ..Default::default()
        };
        let recipe = candidate(&["tahini", "chickpeas", "lemon juice"]);
        let expected = pipeline.assess(&recipe, &household);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| pipeline.assess(&recipe, &household)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("thread panicked"), expected);
            }
        });
    }

    fn severity_strategy() -> impl Strategy<Value = SeverityLevel> {
        prop_oneof![
            Just(SeverityLevel::Mild),
            Just(SeverityLevel::Moderate),
            Just(SeverityLevel::Severe),
            Just(SeverityLevel::LifeThreatening),
        ]
    }

    fn synonym_strategy() -> impl Strategy<Value = String> {
        let synonyms: Vec<String> = ALLERGENS
            .iter()
            .flat_map(|definition| definition.synonyms.iter().map(|s| s.to_string()))
            .chain(["rice", "carrot", "olive oil"].into_iter().map(String::from))
            .collect();
        proptest::sample::select(synonyms)
    }

    proptest! {
        #[test]
        fn test_assess_is_deterministic_and_bounded(
            ingredients in proptest::collection::vec(synonym_strategy(), 0..12),
            declared in proptest::collection::vec((synonym_strategy(), severity_strategy()), 0..4),
        ) {
            let household = HouseholdProfile {
                allergies: declared
                    .into_iter()
                    .map(|(allergen, severity)| MemberAllergy::new(allergen, severity))
                    .collect(),
                ..Default::default()
            };
            let recipe = CandidateRecipe { ingredients, ..Default::default() };

            let first = assess(&recipe, &household);
            let second = assess(&recipe, &household);

            prop_assert!(first.safety_score <= 100);
            prop_assert_eq!(first.warnings.last().map(String::as_str), Some(AI_DISCLAIMER));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_raising_declared_severity_never_raises_score(
            ingredients in proptest::collection::vec(synonym_strategy(), 1..8),
            allergen in synonym_strategy(),
            low in severity_strategy(),
            high in severity_strategy(),
        ) {
            let (low, high) = (low.min(high), low.max(high));
            let household_with = |severity| HouseholdProfile {
                family_members: vec![FamilyMemberProfile {
                    name: "Ana".to_string(),
                    allergies: vec![MemberAllergy::new(allergen.clone(), severity)],
                    ..Default::default()
                }],
                ..Default::default()
            };
            let recipe = CandidateRecipe { ingredients, ..Default::default() };

            let relaxed = assess(&recipe, &household_with(low));
            let strict = assess(&recipe, &household_with(high));

            prop_assert!(strict.safety_score <= relaxed.safety_score);
            for (a, b) in relaxed.detected_allergens.iter().zip(&strict.detected_allergens) {
                prop_assert_eq!(&a.allergen_id, &b.allergen_id);
                prop_assert!(b.severity >= a.severity);
            }
        }
    }
}
