use std::collections::BTreeMap;

use crate::domain::{
    allergen::{
        entities::DetectedAllergen,
        lexicon::{AllergenLexicon, normalize_allergen_key},
    },
    household::entities::{FamilyMemberProfile, HouseholdProfile},
    safety::value_objects::{FamilyRiskReport, MemberAllergenMatch, MemberRisk},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FamilyRiskAggregator {
    lexicon: AllergenLexicon,
}

impl FamilyRiskAggregator {
    pub const fn new(lexicon: AllergenLexicon) -> Self {
        Self { lexicon }
    }

    /// Cross-references detections with every member's declared allergies.
    /// Detection severity only ever rises to the highest declared severity.
    pub fn aggregate(
        &self,
        mut detected: Vec<DetectedAllergen>,
        household: &HouseholdProfile,
    ) -> FamilyRiskReport {
        let is_primary_profile = household.uses_primary_profile();
        let mut per_member_matches = Vec::new();
        let mut affected_members: BTreeMap<String, Vec<FamilyMemberProfile>> = BTreeMap::new();

        for member in household.effective_members() {
            let mut matches: Vec<MemberAllergenMatch> = Vec::new();

            for allergy in &member.allergies {
                for detection in detected.iter_mut() {
                    if !self.declaration_matches(&allergy.allergen, &detection.allergen_id) {
                        continue;
                    }

                    let display_name =
                        self.lexicon.display_name(&detection.allergen_id).to_string();
                    detection.escalate(allergy.severity, &display_name);

                    match matches
                        .iter_mut()
                        .find(|m| m.allergen_id == detection.allergen_id)
                    {
                        Some(existing) => {
                            existing.declared_severity =
                                existing.declared_severity.max(allergy.severity);
                        }
                        None => matches.push(MemberAllergenMatch {
                            allergen_id: detection.allergen_id.clone(),
                            declared_allergy: allergy.allergen.clone(),
                            declared_severity: allergy.severity,
                        }),
                    }
                }
            }

            if matches.is_empty() {
                continue;
            }

            for m in &matches {
                affected_members
                    .entry(m.allergen_id.clone())
                    .or_default()
                    .push(member.clone());
            }

            per_member_matches.push(MemberRisk {
                member,
                is_primary_profile,
                matches,
            });
        }

        tracing::debug!(
            affected_members = per_member_matches.len(),
            "family risk aggregated"
        );

        FamilyRiskReport {
            detected,
            per_member_matches,
            affected_members,
            dietary_conflicts: detect_dietary_conflicts(household),
        }
    }

    /// A declaration matches when it names the allergen through the lexicon ("gluten" for
    /// wheat), the same rule the detector applies, or when the loose id check passes.
    fn declaration_matches(&self, declared_allergy: &str, allergen_id: &str) -> bool {
        let declared_key = normalize_allergen_key(declared_allergy);
        self.lexicon
            .get(allergen_id)
            .is_some_and(|definition| definition.is_named_by(&declared_key))
            || allergy_matches(declared_allergy, allergen_id)
    }
}

/// Loose match: either side contains the other once normalized, so "nuts" matches "tree_nuts".
pub fn allergy_matches(declared_allergy: &str, allergen_id: &str) -> bool {
    let declared = normalize_allergen_key(declared_allergy);
    let allergen = normalize_allergen_key(allergen_id);
    if declared.is_empty() || allergen.is_empty() {
        return false;
    }

    declared.contains(&allergen) || allergen.contains(&declared)
}

/// One note when the household mixes vegetarian/vegan members with members who are not.
pub fn detect_dietary_conflicts(household: &HouseholdProfile) -> Vec<String> {
    if household.uses_primary_profile() {
        return Vec::new();
    }

    let (vegetarian, other): (Vec<&FamilyMemberProfile>, Vec<&FamilyMemberProfile>) = household
        .family_members
        .iter()
        .partition(|member| member.is_vegetarian());

    if vegetarian.is_empty() || other.is_empty() {
        return Vec::new();
    }

    vec![format!(
        "Mixed dietary needs: {} vegetarian or vegan, {} not. Prefer recipes with a flexible protein option.",
        member_names(&vegetarian),
        member_names(&other)
    )]
}

fn member_names(members: &[&FamilyMemberProfile]) -> String {
    members
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
