use crate::models::{Factors, Grade, Nutrient, NutrientMap, ProductType, ScoreBreakdown};
use crate::scoring::constants::*;

/// Look a final score up in the table for the product type.
///
/// Water is always A. Scores outside every band fall back to E.
pub fn grade_from_score(score: i32, product_type: ProductType, is_water: bool) -> Grade {
    if is_water {
        return Grade::A;
    }

    let scale: &[(Grade, i32, i32)] = match product_type {
        ProductType::Solid => &SOLID_GRADE_SCALE,
        ProductType::Beverage => &BEVERAGE_GRADE_SCALE,
    };

    scale
        .iter()
        .find(|(_, min, max)| (*min..=*max).contains(&score))
        .map(|(grade, _, _)| *grade)
        .unwrap_or(Grade::E)
}

/// Apply the trans-fat override, then the added-sugar cap.
pub fn apply_quality_caps(grade: Grade, nutrients: &NutrientMap) -> Grade {
    if nutrients.value(Nutrient::TransFat) > TRANS_FAT_LIMIT {
        return Grade::E;
    }

    if nutrients.added_sugar() > ADDED_SUGAR_LIMIT {
        return grade.capped_at(ADDED_SUGAR_GRADE_CAP);
    }

    grade
}

/// Strengths and concerns implied by a breakdown. Labels only; they never
/// feed back into the score.
pub fn analyze_factors(breakdown: &ScoreBreakdown) -> Factors {
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();

    if breakdown.fiber_points > 0 {
        strengths.push("Good fiber content".to_string());
    }
    if breakdown.protein_points > 0 {
        strengths.push("Good protein content".to_string());
    }
    if breakdown.fvnl_points >= FVNL_STRENGTH_POINTS {
        strengths.push("High FVNL content".to_string());
    }
    if breakdown.energy_points == 0 {
        strengths.push("Low energy density".to_string());
    }
    if breakdown.sat_fat_points == 0 {
        strengths.push("Low saturated fat".to_string());
    }

    if breakdown.sugar_points > CONCERN_POINTS {
        concerns.push("High sugar content".to_string());
    }
    if breakdown.sodium_points > CONCERN_POINTS {
        concerns.push("High sodium content".to_string());
    }
    if breakdown.energy_points > CONCERN_POINTS {
        concerns.push("High energy density".to_string());
    }
    if breakdown.sat_fat_points > CONCERN_POINTS {
        concerns.push("High saturated fat".to_string());
    }

    Factors {
        strengths,
        concerns,
    }
}
