use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::allergen::entities::{AllergenDefinition, RegulatoryCategory};

/// Static allergen table: the nine major regulated allergens followed by the
/// secondary tier. Synonyms are lowercase and checked in listed order.
pub static ALLERGENS: &[AllergenDefinition] = &[
    AllergenDefinition {
        id: "milk",
        display_name: "Milk",
        display_icon: "🥛",
        synonyms: &[
            "milk", "cheese", "cream", "yogurt", "yoghurt", "whey", "casein", "ghee", "lactose",
        ],
        exclusions: &[
            "almond milk",
            "oat milk",
            "soy milk",
            "rice milk",
            "coconut milk",
            "coconut cream",
            "cream of tartar",
        ],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "eggs",
        display_name: "Eggs",
        display_icon: "🥚",
        synonyms: &["egg", "mayonnaise", "meringue", "albumin"],
        exclusions: &["eggplant"],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "fish",
        display_name: "Fish",
        display_icon: "🐟",
        synonyms: &[
            "fish", "salmon", "tuna", "cod", "anchov", "tilapia", "halibut", "trout", "sardine",
            "mackerel", "haddock",
        ],
        exclusions: &["shellfish", "crayfish"],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "shellfish",
        display_name: "Shellfish",
        display_icon: "🦐",
        synonyms: &[
            "shellfish",
            "shrimp",
            "prawn",
            "crab",
            "lobster",
            "crayfish",
            "langoustine",
        ],
        exclusions: &["crab apple"],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "tree_nuts",
        display_name: "Tree nuts",
        display_icon: "🌰",
        synonyms: &[
            "almond",
            "walnut",
            "cashew",
            "pecan",
            "pistachio",
            "hazelnut",
            "macadamia",
            "brazil nut",
            "pine nut",
            "praline",
            "marzipan",
        ],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "peanuts",
        display_name: "Peanuts",
        display_icon: "🥜",
        synonyms: &["peanut", "groundnut"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "wheat",
        display_name: "Wheat/Gluten",
        display_icon: "🌾",
        synonyms: &[
            "wheat", "flour", "bread", "pasta", "couscous", "semolina", "spelt", "gluten",
            "noodle",
        ],
        exclusions: &[
            "buckwheat",
            "rice flour",
            "almond flour",
            "coconut flour",
            "rice noodle",
            "gluten-free",
            "gluten free",
        ],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "soy",
        display_name: "Soy",
        display_icon: "🫘",
        synonyms: &["soy", "tofu", "edamame", "tempeh", "miso", "tamari"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "sesame",
        display_name: "Sesame",
        display_icon: "⚪",
        synonyms: &["sesame", "tahini"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Major,
    },
    AllergenDefinition {
        id: "sulfites",
        display_name: "Sulfites",
        display_icon: "🍷",
        synonyms: &["sulfite", "sulphite", "wine", "dried apricot"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Other,
    },
    AllergenDefinition {
        id: "mustard",
        display_name: "Mustard",
        display_icon: "🟡",
        synonyms: &["mustard"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Other,
    },
    AllergenDefinition {
        id: "celery",
        display_name: "Celery",
        display_icon: "🥬",
        synonyms: &["celery", "celeriac"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Other,
    },
    AllergenDefinition {
        id: "lupin",
        display_name: "Lupin",
        display_icon: "🌼",
        synonyms: &["lupin"],
        exclusions: &[],
        regulatory_category: RegulatoryCategory::Other,
    },
    AllergenDefinition {
        id: "mollusks",
        display_name: "Mollusks",
        display_icon: "🦪",
        synonyms: &[
            "clam", "mussel", "oyster", "scallop", "squid", "octopus", "calamari", "snail",
            "escargot",
        ],
        exclusions: &["oyster mushroom"],
        regulatory_category: RegulatoryCategory::Other,
    },
];

/// Text matching strategy for synonym lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain case-insensitive substring search. Stored safety scores were computed this way.
    #[default]
    Substring,
    /// The synonym must begin at a word boundary; exclusion phrases are masked out first.
    WordStart,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::WordStart => "word_start",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_start" => Ok(MatchMode::WordStart),
            other => Err(format!(
                "unknown match mode '{}', expected 'substring' or 'word_start'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconMatch {
    pub definition: &'static AllergenDefinition,
    pub synonym: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllergenLexicon {
    mode: MatchMode,
}

impl AllergenLexicon {
    pub const fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn definitions(&self) -> &'static [AllergenDefinition] {
        ALLERGENS
    }

    pub fn get(&self, allergen_id: &str) -> Option<&'static AllergenDefinition> {
        ALLERGENS.iter().find(|definition| definition.id == allergen_id)
    }

    /// Display name for an allergen id, falling back to the id itself.
    pub fn display_name<'a>(&self, allergen_id: &'a str) -> &'a str {
        match self.get(allergen_id) {
            Some(definition) => definition.display_name,
            None => allergen_id,
        }
    }

    /// Every definition with at least one synonym found in `ingredient_text`.
    pub fn lookup(&self, ingredient_text: &str) -> Vec<&'static AllergenDefinition> {
        self.lookup_matches(ingredient_text)
            .into_iter()
            .map(|m| m.definition)
            .collect()
    }

    /// Like [`lookup`](Self::lookup) but also reports the first synonym that hit.
    pub fn lookup_matches(&self, ingredient_text: &str) -> Vec<LexiconMatch> {
        let text = ingredient_text.to_lowercase();
        if text.trim().is_empty() {
            return Vec::new();
        }

        ALLERGENS
            .iter()
            .filter_map(|definition| {
                let haystack: Cow<'_, str> = match self.mode {
                    MatchMode::Substring => Cow::Borrowed(&text),
                    MatchMode::WordStart => {
                        Cow::Owned(mask_exclusions(&text, definition.exclusions))
                    }
                };

                definition
                    .synonyms
                    .iter()
                    .copied()
                    .find(|synonym| self.contains(&haystack, synonym))
                    .map(|synonym| LexiconMatch {
                        definition,
                        synonym,
                    })
            })
            .collect()
    }

    fn contains(&self, haystack: &str, synonym: &str) -> bool {
        match self.mode {
            MatchMode::Substring => haystack.contains(synonym),
            MatchMode::WordStart => haystack.match_indices(synonym).any(|(index, _)| {
                haystack[..index]
                    .chars()
                    .next_back()
                    .is_none_or(|c| !c.is_alphanumeric())
            }),
        }
    }
}

fn mask_exclusions(text: &str, exclusions: &[&str]) -> String {
    exclusions
        .iter()
        .fold(text.to_string(), |masked, exclusion| {
            masked.replace(exclusion, " ")
        })
}

/// Canonical key form used when comparing declared allergies with lexicon ids.
pub fn normalize_allergen_key(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
