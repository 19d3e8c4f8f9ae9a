#[macro_use]
extern crate assert_float_eq;

use chrono::Utc;
use serde_json::json;

use nutri_grade_rs::models::{Grade, Nutrient, NutrientMap, ProductType, RawNutriments};
use nutri_grade_rs::scoring::{
    calculate_score, normalize, score, score_at, MODEL_NAME, NO_DATA_MESSAGE,
};

fn raw(value: serde_json::Value) -> RawNutriments {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_solid_scenario_matches_formulas() {
    let nutrients = normalize(
        &raw(json!({
            "energy-kcal_100g": 250,
            "saturated-fat_100g": 3.5,
            "sugars_100g": 12,
            "sodium_100g": 300,
            "fiber_100g": 2,
            "proteins_100g": 5,
            "carbohydrates_100g": 40
        })),
        None,
    );
    assert_float_absolute_eq!(nutrients.fvnl(), 17.5, 1e-9);
    assert_float_absolute_eq!(nutrients.added_sugar(), 30.0, 1e-9);

    let report = score(&nutrients, false, false);
    let b = report.breakdown.unwrap();

    // floor(250/80), floor(3.5/1), floor(12/4.5), floor(300/90)
    assert_eq!((b.energy_points, b.sat_fat_points, b.sugar_points, b.sodium_points), (3, 3, 2, 3));
    assert_eq!(b.baseline_points, 11);
    // floor(2/0.9), floor(5/1.6), FVNL 17.5% -> 1
    assert_eq!((b.fiber_points, b.protein_points, b.fvnl_points), (2, 3, 1));
    assert_eq!(b.positive_points, 6);
    assert_eq!(report.score, 5);

    assert_eq!(report.initial_grade, Grade::B);
    // 30% added sugar caps the grade at C
    assert_eq!(report.grade, Grade::C);
    assert_eq!(report.product_type, ProductType::Solid);
    assert_eq!(report.model, MODEL_NAME);
    assert_eq!(report.missing_nutrients, vec![Nutrient::TransFat]);
}

#[test]
fn test_high_sat_fat_snack_scores_c() {
    let nutrients = normalize(
        &raw(json!({
            "energy-kcal_100g": 536,
            "saturated-fat_100g": 15,
            "sugars_100g": 0.5,
            "carbohydrates_100g": 50,
            "proteins_100g": 6.7
        })),
        None,
    );
    assert_float_absolute_eq!(nutrients.fvnl(), 13.4, 1e-9);
    assert_float_absolute_eq!(nutrients.added_sugar(), 1.0, 1e-9);

    let report = score(&nutrients, false, false);
    let b = report.breakdown.unwrap();

    // floor(536/80), 15 g sat fat capped at 10, floor(0.5/4.5), no sodium
    assert_eq!((b.energy_points, b.sat_fat_points, b.sugar_points, b.sodium_points), (6, 10, 0, 0));
    assert_eq!(b.baseline_points, 16);
    // no fiber, floor(6.7/1.6), FVNL 13.4% -> 1
    assert_eq!((b.fiber_points, b.protein_points, b.fvnl_points), (0, 4, 1));
    assert_eq!(b.positive_points, 5);
    assert_eq!(report.score, 11);

    assert_eq!(report.initial_grade, Grade::C);
    assert_eq!(report.grade, Grade::C);
    assert_eq!(
        report.missing_nutrients,
        vec![Nutrient::Sodium, Nutrient::Fiber, Nutrient::TransFat]
    );
}

#[test]
fn test_huge_fiber_and_protein_do_not_overflow() {
    let report = calculate_score(
        &raw(json!({"fiber": 1e12, "proteins": 1e12, "carbohydrates": 10})),
        None,
        false,
        false,
    );

    assert!(!report.is_error());
    assert_eq!(report.score, -i32::MAX);
    assert_eq!(report.grade, Grade::A);
}

#[test]
fn test_beverage_scenario() {
    let report = calculate_score(
        &raw(json!({"energy-kcal": 42, "sugars": 10.6, "carbohydrates": 10.6, "sodium": 10})),
        None,
        true,
        false,
    );
    let b = report.breakdown.unwrap();

    assert_eq!(b.energy_points, 6);
    assert_eq!(b.sugar_points, 7);
    assert_eq!(b.sodium_points, 0);
    assert_eq!(b.fvnl_points, 0);
    assert_eq!(report.score, 13);
    assert_eq!(report.initial_grade, Grade::D);
    assert_eq!(report.grade, Grade::D);
    assert_eq!(report.product_type, ProductType::Beverage);
}

#[test]
fn test_beverage_gate_withholds_nutrient_points() {
    let nutrients = NutrientMap {
        proteins: Some(3.0),
        fiber: Some(1.0),
        carbohydrates: Some(20.0),
        fvnl_percent: Some(20.0),
        ..Default::default()
    };

    let beverage = score(&nutrients, true, false).breakdown.unwrap();
    assert_eq!((beverage.fiber_points, beverage.protein_points), (0, 0));
    assert_eq!(beverage.fvnl_points, 1);

    let solid = score(&nutrients, false, false).breakdown.unwrap();
    assert_eq!((solid.fiber_points, solid.protein_points), (1, 1));
}

#[test]
fn test_trans_fat_forces_e() {
    let nutrients = NutrientMap {
        fiber: Some(9.5),
        proteins: Some(8.5),
        trans_fat: Some(0.5),
        ..Default::default()
    };
    let report = score(&nutrients, false, false);
    assert_eq!(report.initial_grade, Grade::A);
    assert_eq!(report.grade, Grade::E);
}

#[test]
fn test_trans_fat_at_limit_is_allowed() {
    let nutrients = NutrientMap {
        fiber: Some(9.5),
        trans_fat: Some(0.2),
        ..Default::default()
    };
    assert_eq!(score(&nutrients, false, false).grade, Grade::A);
}

#[test]
fn test_water_override() {
    let nutrients = NutrientMap {
        sugars: Some(40.0),
        energy_kcal: Some(200.0),
        ..Default::default()
    };
    let report = score(&nutrients, true, true);
    assert_eq!(report.grade, Grade::A);
    assert!(report.is_water);
}

#[test]
fn test_empty_input_is_error_result() {
    let report = calculate_score(&RawNutriments::new(), None, false, false);
    assert_eq!(report.score, 0);
    assert_eq!(report.grade, Grade::E);
    assert_eq!(report.factors.concerns, vec![NO_DATA_MESSAGE.to_string()]);
    assert_eq!(report.error.as_deref(), Some(NO_DATA_MESSAGE));

    // Only unusable fields behaves the same.
    let report = calculate_score(&raw(json!({"sugars": "n/a", "brand": "x"})), None, false, false);
    assert!(report.is_error());
}

#[test]
fn test_idempotent() {
    let nutrients = normalize(
        &raw(json!({"energy-kcal": "1,200", "proteins": 30, "sugars": 4})),
        Some(50.0),
    );
    let at = Utc::now();
    assert_eq!(score_at(&nutrients, false, false, at), score_at(&nutrients, false, false, at));
    assert_eq!(normalize(&raw(json!({"sugars": 4})), None), normalize(&raw(json!({"sugars": 4})), None));
}

#[test]
fn test_serving_size_rescale_only_implausible_values() {
    let nutrients = normalize(&raw(json!({"energy-kcal": 1200, "sugars": 8})), Some(50.0));
    assert_float_absolute_eq!(nutrients.energy_kcal.unwrap(), 2400.0, 1e-9);
    assert_float_absolute_eq!(nutrients.sugars.unwrap(), 8.0, 1e-9);
}

#[test]
fn test_report_serializes_with_expected_keys() {
    let report = calculate_score(&raw(json!({"sugars_100g": 3})), None, false, false);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["grade"], "B");
    assert_eq!(value["product_type"], "solid");
    assert_eq!(value["model"], MODEL_NAME);
    assert_eq!(value["normalized_nutrition"]["sugars"], 3.0);
    assert!(value.get("error").is_none());
}
