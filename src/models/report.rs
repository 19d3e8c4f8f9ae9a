use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::grade::{Grade, ProductType};
use crate::models::nutrients::{Nutrient, NutrientMap};

/// Per-nutrient point contributions for one scoring call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub baseline_points: i32,
    pub positive_points: i32,
    pub final_score: i32,
    pub energy_points: i32,
    pub sat_fat_points: i32,
    pub sugar_points: i32,
    pub sodium_points: i32,
    pub fiber_points: i32,
    pub protein_points: i32,
    pub fvnl_points: i32,
}

/// Qualitative labels derived from a breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factors {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

/// Full scoring result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: i32,
    pub grade: Grade,
    /// Grade from the lookup table, before the trans-fat/added-sugar caps.
    pub initial_grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub factors: Factors,
    pub normalized_nutrition: NutrientMap,
    pub product_type: ProductType,
    pub is_water: bool,
    /// Scoring inputs that were absent and counted as zero.
    #[serde(default)]
    pub missing_nutrients: Vec<Nutrient>,
    pub calculated_at: DateTime<Utc>,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreReport {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
