use crate::models::{Grade, Nutrient};

/// Model identifier stamped on every score report.
pub const MODEL_NAME: &str = "INR_HSR_v1";

// ─────────────────────────────────────────────────────────────────────────────
// Baseline (penalty) points
// ─────────────────────────────────────────────────────────────────────────────

/// Cap for each of the four baseline sub-scores.
pub const BASELINE_SUB_SCORE_CAP: i32 = 10;

/// kcal per point.
pub const SOLID_ENERGY_STEP: f64 = 80.0;
pub const BEVERAGE_ENERGY_STEP: f64 = 7.0;

/// Grams of saturated fat per point (solids and beverages).
pub const SAT_FAT_STEP: f64 = 1.0;

/// Grams of total sugar per point.
pub const SOLID_SUGAR_STEP: f64 = 4.5;
pub const BEVERAGE_SUGAR_STEP: f64 = 1.5;

/// Milligrams of sodium per point (solids and beverages).
pub const SODIUM_STEP: f64 = 90.0;

// ─────────────────────────────────────────────────────────────────────────────
// Positive points
// ─────────────────────────────────────────────────────────────────────────────

pub const FIBER_STEP: f64 = 0.9;
pub const PROTEIN_STEP: f64 = 1.6;

/// Beverages earn fiber/protein points only above this FVNL percentage.
pub const BEVERAGE_FVNL_GATE: f64 = 40.0;

/// FVNL buckets: (strictly greater than percent, points), best first.
pub const FVNL_BUCKETS: [(f64, i32); 5] = [(80.0, 5), (60.0, 4), (40.0, 3), (20.0, 2), (0.0, 1)];

// ─────────────────────────────────────────────────────────────────────────────
// Grade tables: (grade, min score, max score), both bounds inclusive.
// ─────────────────────────────────────────────────────────────────────────────

pub const SOLID_GRADE_SCALE: [(Grade, i32, i32); 5] = [
    (Grade::A, i32::MIN, -1),
    (Grade::B, 0, 10),
    (Grade::C, 11, 18),
    (Grade::D, 19, 26),
    (Grade::E, 27, i32::MAX),
];

/// No E band: beverages scoring 10 or more land in D.
pub const BEVERAGE_GRADE_SCALE: [(Grade, i32, i32); 4] = [
    (Grade::A, i32::MIN, 1),
    (Grade::B, 2, 5),
    (Grade::C, 6, 9),
    (Grade::D, 10, i32::MAX),
];

// ─────────────────────────────────────────────────────────────────────────────
// Quality caps
// ─────────────────────────────────────────────────────────────────────────────

/// Trans fat (g/100g) above which the grade is forced to E.
pub const TRANS_FAT_LIMIT: f64 = 0.2;

/// Added sugar percentage above which the grade cannot beat [`ADDED_SUGAR_GRADE_CAP`].
pub const ADDED_SUGAR_LIMIT: f64 = 10.0;
pub const ADDED_SUGAR_GRADE_CAP: Grade = Grade::C;

// ─────────────────────────────────────────────────────────────────────────────
// Factor thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Baseline sub-score above which a nutrient is reported as a concern.
pub const CONCERN_POINTS: i32 = 5;

/// FVNL points at or above which FVNL is reported as a strength.
pub const FVNL_STRENGTH_POINTS: i32 = 3;

pub const NO_DATA_MESSAGE: &str = "No valid nutrition data provided";

// ─────────────────────────────────────────────────────────────────────────────
// Per-serving detection
// ─────────────────────────────────────────────────────────────────────────────

pub const PER_SERVING_ENERGY_LIMIT: f64 = 900.0;
pub const PER_SERVING_GRAM_LIMIT: f64 = 100.0;
pub const PER_SERVING_SODIUM_LIMIT: f64 = 2000.0;

/// Value above which a nutrient cannot plausibly be per 100 g/ml.
pub fn per_serving_limit(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::EnergyKcal => Some(PER_SERVING_ENERGY_LIMIT),
        Nutrient::Sodium => Some(PER_SERVING_SODIUM_LIMIT),
        n if n.is_gram_macro() => Some(PER_SERVING_GRAM_LIMIT),
        _ => None,
    }
}
