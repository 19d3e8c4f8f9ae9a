use crate::models::{Nutrient, NutrientMap, ProductType, ScoreBreakdown};
use crate::scoring::constants::*;

/// `floor(value / step)`, never below zero.
#[inline]
fn step_points(value: f64, step: f64) -> i32 {
    (value.max(0.0) / step).floor() as i32
}

/// Step points capped at [`BASELINE_SUB_SCORE_CAP`].
#[inline]
fn capped_points(value: f64, step: f64) -> i32 {
    step_points(value, step).min(BASELINE_SUB_SCORE_CAP)
}

pub fn energy_points(energy_kcal: f64, product_type: ProductType) -> i32 {
    let step = match product_type {
        ProductType::Solid => SOLID_ENERGY_STEP,
        ProductType::Beverage => BEVERAGE_ENERGY_STEP,
    };
    capped_points(energy_kcal, step)
}

pub fn sat_fat_points(sat_fat: f64) -> i32 {
    capped_points(sat_fat, SAT_FAT_STEP)
}

pub fn sugar_points(sugars: f64, product_type: ProductType) -> i32 {
    let step = match product_type {
        ProductType::Solid => SOLID_SUGAR_STEP,
        ProductType::Beverage => BEVERAGE_SUGAR_STEP,
    };
    capped_points(sugars, step)
}

pub fn sodium_points(sodium_mg: f64) -> i32 {
    capped_points(sodium_mg, SODIUM_STEP)
}

/// Uncapped.
pub fn fiber_points(fiber: f64) -> i32 {
    step_points(fiber, FIBER_STEP)
}

/// Uncapped.
pub fn protein_points(protein: f64) -> i32 {
    step_points(protein, PROTEIN_STEP)
}

/// FVNL bucket, 0 to 5.
pub fn fvnl_points(fvnl_percent: f64) -> i32 {
    FVNL_BUCKETS
        .iter()
        .find(|(above, _)| fvnl_percent > *above)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Compute every sub-score and the signed final score.
///
/// Beverages only earn fiber and protein points when FVNL exceeds
/// [`BEVERAGE_FVNL_GATE`]; the FVNL bucket itself always counts.
pub fn calculate_breakdown(nutrients: &NutrientMap, product_type: ProductType) -> ScoreBreakdown {
    let energy = energy_points(nutrients.value(Nutrient::EnergyKcal), product_type);
    let sat_fat = sat_fat_points(nutrients.value(Nutrient::SaturatedFat));
    let sugar = sugar_points(nutrients.value(Nutrient::Sugars), product_type);
    let sodium = sodium_points(nutrients.value(Nutrient::Sodium));
    let baseline_points = energy + sat_fat + sugar + sodium;

    let fvnl_percent = nutrients.fvnl();
    let earns_nutrient_points =
        !product_type.is_beverage() || fvnl_percent > BEVERAGE_FVNL_GATE;
    let (fiber, protein) = if earns_nutrient_points {
        (
            fiber_points(nutrients.value(Nutrient::Fiber)),
            protein_points(nutrients.value(Nutrient::Proteins)),
        )
    } else {
        (0, 0)
    };
    let fvnl = fvnl_points(fvnl_percent);
    // Fiber and protein are uncapped; huge inputs saturate instead of overflowing.
    let positive_points = fiber.saturating_add(protein).saturating_add(fvnl);

    ScoreBreakdown {
        baseline_points,
        positive_points,
        final_score: baseline_points.saturating_sub(positive_points),
        energy_points: energy,
        sat_fat_points: sat_fat,
        sugar_points: sugar,
        sodium_points: sodium,
        fiber_points: fiber,
        protein_points: protein,
        fvnl_points: fvnl,
    }
}
