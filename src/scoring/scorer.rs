use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::models::{
    Factors, Grade, Nutrient, NutrientMap, ProductType, RawNutriments, ScoreReport,
};
use crate::scoring::calculations::calculate_breakdown;
use crate::scoring::constants::{MODEL_NAME, NO_DATA_MESSAGE};
use crate::scoring::grading::{analyze_factors, apply_quality_caps, grade_from_score};
use crate::scoring::normalize::normalize;

/// Score a normalized nutrient map.
///
/// Water bypasses both the grade table and the quality caps. An empty map
/// (for anything but water) yields the standard no-data report.
pub fn score(nutrients: &NutrientMap, is_beverage: bool, is_water: bool) -> ScoreReport {
    score_at(nutrients, is_beverage, is_water, Utc::now())
}

/// [`score`] with an explicit timestamp.
pub fn score_at(
    nutrients: &NutrientMap,
    is_beverage: bool,
    is_water: bool,
    calculated_at: DateTime<Utc>,
) -> ScoreReport {
    let product_type = ProductType::from_beverage_flag(is_beverage);

    if nutrients.is_empty() && !is_water {
        warn!(%product_type, "no usable nutrition data");
        return error_report(NO_DATA_MESSAGE, product_type, calculated_at);
    }

    let breakdown = calculate_breakdown(nutrients, product_type);
    let initial_grade = grade_from_score(breakdown.final_score, product_type, is_water);
    let grade = if is_water {
        initial_grade
    } else {
        apply_quality_caps(initial_grade, nutrients)
    };
    let factors = analyze_factors(&breakdown);

    info!(
        score = breakdown.final_score,
        %grade,
        %initial_grade,
        %product_type,
        is_water,
        "calculated INR/HSR score"
    );

    ScoreReport {
        score: breakdown.final_score,
        grade,
        initial_grade,
        breakdown: Some(breakdown),
        factors,
        normalized_nutrition: nutrients.clone(),
        product_type,
        is_water,
        missing_nutrients: nutrients.missing(),
        calculated_at,
        model: MODEL_NAME.to_string(),
        error: None,
    }
}

/// Normalize raw nutriments and score them.
pub fn calculate_score(
    raw: &RawNutriments,
    serving_size: Option<f64>,
    is_beverage: bool,
    is_water: bool,
) -> ScoreReport {
    let normalized = normalize(raw, serving_size);
    score(&normalized, is_beverage, is_water)
}

/// Displayable result for input that cannot be scored.
fn error_report(
    message: &str,
    product_type: ProductType,
    calculated_at: DateTime<Utc>,
) -> ScoreReport {
    ScoreReport {
        score: 0,
        grade: Grade::E,
        initial_grade: Grade::E,
        breakdown: None,
        factors: Factors {
            strengths: Vec::new(),
            concerns: vec![message.to_string()],
        },
        normalized_nutrition: NutrientMap::default(),
        product_type,
        is_water: false,
        missing_nutrients: Nutrient::SCORING_INPUTS.to_vec(),
        calculated_at,
        model: MODEL_NAME.to_string(),
        error: Some(message.to_string()),
    }
}
