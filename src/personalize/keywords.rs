use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::DietType;

fn table(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(name, words)| {
            (
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

fn default_allergens() -> BTreeMap<String, Vec<String>> {
    table(&[
        ("Peanuts", &["peanut", "groundnut", "arachis"]),
        (
            "Tree Nuts (Cashews, Almonds, Walnuts)",
            &[
                "cashew",
                "almond",
                "walnut",
                "pistachio",
                "pecan",
                "hazelnut",
                "brazil nut",
                "macadamia",
            ],
        ),
        (
            "Milk/Dairy",
            &[
                "milk", "curd", "paneer", "whey", "casein", "lactose", "cream", "ghee", "butter",
                "cheese", "yogurt", "dahi",
            ],
        ),
        (
            "Wheat/Gluten",
            &["wheat", "gluten", "maida", "atta", "flour", "bread", "pasta", "noodle"],
        ),
        ("Mustard", &["mustard", "sarson", "rai"]),
        ("Soy", &["soy", "soya", "soybean", "tofu", "tempeh", "edamame"]),
        ("Egg", &["egg", "albumin", "lecithin"]),
        ("Sesame", &["sesame", "til", "tahini"]),
        (
            "Shellfish/Fish",
            &[
                "fish", "shellfish", "prawn", "shrimp", "crab", "lobster", "mussel", "clam",
                "oyster", "sardine", "salmon", "tuna", "cod",
            ],
        ),
    ])
}

fn default_diets() -> BTreeMap<String, Vec<String>> {
    table(&[
        (
            "Vegan",
            &[
                "meat", "chicken", "fish", "egg", "milk", "dairy", "honey", "gelatin", "animal",
            ],
        ),
        ("Vegetarian", &["meat", "chicken", "fish", "prawn", "shrimp"]),
        (
            "Paleo",
            &[
                "wheat", "grain", "rice", "corn", "legume", "bean", "lentil", "dairy", "milk",
                "cheese",
            ],
        ),
    ])
}

/// Built-in tables, shared read-only.
pub static DEFAULT_KEYWORDS: LazyLock<KeywordTables> = LazyLock::new(|| KeywordTables {
    allergens: default_allergens(),
    diets: default_diets(),
});

/// Ingredient keyword lists used for allergen and diet screening.
///
/// Keyword order matters: allergen screening reports the first keyword
/// found. Keywords are matched against lowercased ingredient text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTables {
    /// Allergen name → keywords.
    #[serde(default = "default_allergens")]
    pub allergens: BTreeMap<String, Vec<String>>,

    /// Diet label → restricted keywords.
    #[serde(default = "default_diets")]
    pub diets: BTreeMap<String, Vec<String>>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        DEFAULT_KEYWORDS.clone()
    }
}

impl KeywordTables {
    /// Keywords for an allergen (name compared case-insensitively).
    pub fn allergen_keywords(&self, allergen: &str) -> Option<&[String]> {
        let wanted = allergen.trim();
        self.allergens
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, words)| words.as_slice())
    }

    /// Restricted keywords for a diet; empty when the diet is screened by
    /// nutrients or not at all.
    pub fn diet_keywords(&self, diet: DietType) -> &[String] {
        self.diets
            .get(diet.label())
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    pub fn allergen_names(&self) -> Vec<&str> {
        self.allergens.keys().map(String::as_str).collect()
    }

    /// Lowercase and trim every keyword, dropping empty ones.
    pub fn normalized(mut self) -> Self {
        for words in self.allergens.values_mut().chain(self.diets.values_mut()) {
            *words = words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
        }
        self
    }
}
