use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw nutriment fields as delivered by the data source, keyed by
/// Open-Food-Facts style names (`sugars`, `sugars_100g`, ...).
pub type RawNutriments = BTreeMap<String, Value>;

/// A nutrient the normalizer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    #[serde(rename = "energy-kcal")]
    EnergyKcal,
    #[serde(rename = "proteins")]
    Proteins,
    #[serde(rename = "carbohydrates")]
    Carbohydrates,
    #[serde(rename = "sugars")]
    Sugars,
    #[serde(rename = "fat")]
    Fat,
    #[serde(rename = "saturated-fat")]
    SaturatedFat,
    #[serde(rename = "trans-fat")]
    TransFat,
    #[serde(rename = "fiber")]
    Fiber,
    #[serde(rename = "sodium")]
    Sodium,
    #[serde(rename = "calcium")]
    Calcium,
    #[serde(rename = "iron")]
    Iron,
    #[serde(rename = "vitamin-c")]
    VitaminC,
}

impl Nutrient {
    pub const ALL: [Nutrient; 12] = [
        Nutrient::EnergyKcal,
        Nutrient::Proteins,
        Nutrient::Carbohydrates,
        Nutrient::Sugars,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::Fiber,
        Nutrient::Sodium,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminC,
    ];

    /// Nutrients the scorer reads, directly or through a derived ratio.
    pub const SCORING_INPUTS: [Nutrient; 8] = [
        Nutrient::EnergyKcal,
        Nutrient::SaturatedFat,
        Nutrient::Sugars,
        Nutrient::Sodium,
        Nutrient::Fiber,
        Nutrient::Proteins,
        Nutrient::Carbohydrates,
        Nutrient::TransFat,
    ];

    /// Bare field name.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::EnergyKcal => "energy-kcal",
            Nutrient::Proteins => "proteins",
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Sugars => "sugars",
            Nutrient::Fat => "fat",
            Nutrient::SaturatedFat => "saturated-fat",
            Nutrient::TransFat => "trans-fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sodium => "sodium",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::VitaminC => "vitamin-c",
        }
    }

    /// Field name with the explicit per-100 suffix.
    pub fn per_100_key(self) -> &'static str {
        match self {
            Nutrient::EnergyKcal => "energy-kcal_100g",
            Nutrient::Proteins => "proteins_100g",
            Nutrient::Carbohydrates => "carbohydrates_100g",
            Nutrient::Sugars => "sugars_100g",
            Nutrient::Fat => "fat_100g",
            Nutrient::SaturatedFat => "saturated-fat_100g",
            Nutrient::TransFat => "trans-fat_100g",
            Nutrient::Fiber => "fiber_100g",
            Nutrient::Sodium => "sodium_100g",
            Nutrient::Calcium => "calcium_100g",
            Nutrient::Iron => "iron_100g",
            Nutrient::VitaminC => "vitamin-c_100g",
        }
    }

    /// Resolve either the bare or the `_100g` key.
    pub fn from_key(key: &str) -> Option<Nutrient> {
        let bare = key.strip_suffix("_100g").unwrap_or(key);
        Nutrient::ALL.into_iter().find(|n| n.key() == bare)
    }

    /// Macros reported in grams.
    pub fn is_gram_macro(self) -> bool {
        matches!(
            self,
            Nutrient::Proteins
                | Nutrient::Carbohydrates
                | Nutrient::Sugars
                | Nutrient::Fat
                | Nutrient::Fiber
        )
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Canonical nutrient values, all per 100 g/ml. Sodium is in milligrams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientMap {
    #[serde(rename = "energy-kcal", default, skip_serializing_if = "Option::is_none")]
    pub energy_kcal: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,

    #[serde(rename = "saturated-fat", default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,

    #[serde(rename = "trans-fat", default, skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,

    #[serde(rename = "vitamin-c", default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,

    /// Fruit/vegetable/nut/legume proxy, in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fvnl_percent: Option<f64>,

    /// Sugars as a share of carbohydrates, in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_sugar_percent: Option<f64>,
}

impl NutrientMap {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::EnergyKcal => self.energy_kcal,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Sugars => self.sugars,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::EnergyKcal => &mut self.energy_kcal,
            Nutrient::Proteins => &mut self.proteins,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
            Nutrient::Sugars => &mut self.sugars,
            Nutrient::Fat => &mut self.fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::VitaminC => &mut self.vitamin_c,
        };
        *slot = Some(value);
    }

    /// Value used for scoring: absent counts as zero.
    #[inline]
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    #[inline]
    pub fn fvnl(&self) -> f64 {
        self.fvnl_percent.unwrap_or(0.0)
    }

    #[inline]
    pub fn added_sugar(&self) -> f64 {
        self.added_sugar_percent.unwrap_or(0.0)
    }

    /// True when no nutrient (supplied or derived) is present.
    pub fn is_empty(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_none())
            && self.fvnl_percent.is_none()
            && self.added_sugar_percent.is_none()
    }

    /// Scoring inputs that were not supplied and defaulted to zero.
    pub fn missing(&self) -> Vec<Nutrient> {
        Nutrient::SCORING_INPUTS
            .into_iter()
            .filter(|n| self.get(*n).is_none())
            .collect()
    }

    /// Fraction of scoring inputs that were supplied, 0.0 to 1.0.
    pub fn completeness(&self) -> f64 {
        let total = Nutrient::SCORING_INPUTS.len();
        (total - self.missing().len()) as f64 / total as f64
    }
}
