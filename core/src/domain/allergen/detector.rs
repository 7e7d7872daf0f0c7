use std::collections::BTreeSet;

use crate::domain::allergen::{
    entities::{AllergenDefinition, DetectedAllergen, MatchConfidence, SeverityLevel},
    lexicon::{AllergenLexicon, normalize_allergen_key},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllergenDetector {
    lexicon: AllergenLexicon,
}

impl AllergenDetector {
    pub const fn new(lexicon: AllergenLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &AllergenLexicon {
        &self.lexicon
    }

    /// Scans `ingredients` and returns one detection per allergen id, in order of first
    /// appearance. Allergens the household declared are life-threatening, the rest moderate.
    pub fn detect(
        &self,
        ingredients: &[String],
        known_user_allergens: &BTreeSet<String>,
    ) -> Vec<DetectedAllergen> {
        let known: BTreeSet<String> = known_user_allergens
            .iter()
            .map(|allergen| normalize_allergen_key(allergen))
            .filter(|key| !key.is_empty())
            .collect();

        let mut seen = BTreeSet::new();
        let mut detected = Vec::new();

        for ingredient in ingredients {
            for hit in self.lexicon.lookup_matches(ingredient) {
                if !seen.insert(hit.definition.id) {
                    continue;
                }

                let (confidence, severity) = if is_declared(hit.definition, &known) {
                    (MatchConfidence::Declared, SeverityLevel::LifeThreatening)
                } else {
                    (MatchConfidence::Heuristic, SeverityLevel::Moderate)
                };

                detected.push(DetectedAllergen::new(
                    hit.definition,
                    hit.synonym,
                    confidence,
                    severity,
                ));
            }
        }

        detected
    }
}

// A declaration names the canonical id or one of its synonyms ("peanut" for peanuts).
fn is_declared(definition: &AllergenDefinition, known: &BTreeSet<String>) -> bool {
    known.iter().any(|key| definition.is_named_by(key))
}
