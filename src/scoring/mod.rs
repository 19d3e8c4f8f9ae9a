pub mod calculations;
pub mod constants;
pub mod grading;
pub mod normalize;
pub mod scorer;

pub use calculations::{
    calculate_breakdown, energy_points, fiber_points, fvnl_points, protein_points, sat_fat_points,
    sodium_points, sugar_points,
};
pub use constants::*;
pub use grading::{analyze_factors, apply_quality_caps, grade_from_score};
pub use normalize::{normalize, parse_nutrient_value, parse_serving_size};
pub use scorer::{calculate_score, score, score_at};
