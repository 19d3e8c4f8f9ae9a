use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::grade::Grade;
use crate::models::nutrients::RawNutriments;

/// A product record as handed over by the data-acquisition side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub ingredients_text: Option<String>,

    #[serde(default)]
    pub nutriments: RawNutriments,

    /// Number of grams/ml per serving, as a number or text such as `"30 g"`.
    #[serde(default)]
    pub serving_size: Option<Value>,

    /// Previously computed grade, if the caller has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_grade: Option<Grade>,
}

impl Product {
    /// Name for display, falling back to the barcode.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.barcode.clone())
            .unwrap_or_else(|| "Unnamed product".to_string())
    }

    /// Lowercased "name brand" text used for keyword classification.
    pub fn name_brand(&self) -> String {
        format!(
            "{} {}",
            self.name.as_deref().unwrap_or(""),
            self.brand.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    /// Lowercased ingredient list, empty when unknown.
    pub fn ingredients_lower(&self) -> String {
        self.ingredients_text
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
    }
}
