use std::collections::BTreeMap;

use crate::domain::{
    allergen::{
        entities::SeverityLevel,
        lexicon::{AllergenLexicon, normalize_allergen_key},
    },
    household::entities::HouseholdProfile,
    recipe::value_objects::GenerateRecipeInput,
};

struct AllergyLine {
    label: String,
    severity: SeverityLevel,
    members: Vec<String>,
}

/// Renders a household's constraints into the instruction sent to the recipe generator.
pub fn build_recipe_prompt(
    household: &HouseholdProfile,
    input: &GenerateRecipeInput,
    lexicon: &AllergenLexicon,
) -> String {
    let members = household.effective_members();
    let servings = if household.household_size > 0 {
        household.household_size as usize
    } else {
        members.len()
    };

    let mut lines = vec![format!(
        "Create one {} recipe for a household of {}.",
        input.meal_type.as_str(),
        servings
    )];
    lines.push(format!(
        "Cooking skill: {}. Budget: {}.",
        household.cooking_skill.as_str(),
        household.budget_level.as_str()
    ));
    if household.cooking_time_minutes > 0 {
        lines.push(format!(
            "Total preparation and cooking time must not exceed {} minutes.",
            household.cooking_time_minutes
        ));
    }
    if let Some(cuisine) = input.cuisine.as_deref().filter(|c| !c.trim().is_empty()) {
        lines.push(format!("Cuisine: {}.", cuisine.trim()));
    }

    let mut allergies: BTreeMap<String, AllergyLine> = BTreeMap::new();
    for member in &members {
        for allergy in &member.allergies {
            let key = normalize_allergen_key(&allergy.allergen);
            if key.is_empty() {
                continue;
            }

            let line = allergies.entry(key.clone()).or_insert_with(|| AllergyLine {
                label: match lexicon.get(&key) {
                    Some(definition) => definition.display_name.to_string(),
                    None => allergy.allergen.trim().to_string(),
                },
                severity: allergy.severity,
                members: Vec::new(),
            });
            line.severity = line.severity.max(allergy.severity);
            if !line.members.contains(&member.name) {
                line.members.push(member.name.clone());
            }
        }
    }

    if !allergies.is_empty() {
        lines.push(
            "STRICTLY AVOID the following allergens and any ingredient derived from them:"
                .to_string(),
        );
        for line in allergies.values() {
            lines.push(format!(
                "- {} ({}; {})",
                line.label,
                line.severity.label(),
                line.members.join(", ")
            ));
        }
    }

    let restrictions = household.declared_restrictions();
    if !restrictions.is_empty() {
        lines.push(format!(
            "Respect these dietary restrictions: {}.",
            restrictions.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    let vegetarians = members.iter().filter(|m| m.is_vegetarian()).count();
    if vegetarians > 0 && vegetarians < members.len() {
        lines.push(
            "Some eaters are vegetarian and some are not: keep the protein component optional or swappable."
                .to_string(),
        );
    }

    let dislikes = household.declared_dislikes();
    if !dislikes.is_empty() {
        lines.push(format!(
            "Avoid these disliked ingredients where possible: {}.",
            dislikes.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    if let Some(notes) = input.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("Additional notes: {}", notes.trim()));
    }

    lines.push(
        "List each ingredient with its quantity as a separate string. Put any allergy caveats in safety_notes."
            .to_string(),
    );
    lines.push("Respond only with JSON matching the provided schema.".to_string());

    lines.join("\n")
}
