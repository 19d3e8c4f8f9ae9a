use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use nutri_grade_rs::classify::{is_beverage, is_water};
use nutri_grade_rs::compare::{compare, Winner};
use nutri_grade_rs::data::{load_products, write_csv};
use nutri_grade_rs::evaluation::{evaluate, score_product};
use nutri_grade_rs::models::{Grade, Product};
use nutri_grade_rs::personalize::PersonalizationEngine;

fn product(value: serde_json::Value) -> Product {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_mineral_water_scores_a() {
    let water = product(json!({
        "name": "Natural Mineral Water",
        "brand": "Alpine",
        "category": "Waters",
        "nutriments": {"sodium_100g": 1.2}
    }));

    assert!(is_beverage(&water));
    assert!(is_water(&water));
    assert_eq!(score_product(&water).grade, Grade::A);
}

#[test]
fn test_cola_is_beverage_not_water() {
    let cola = product(json!({
        "name": "Cola",
        "brand": "Fizz",
        "category": "Carbonated soft drinks",
        "nutriments": {"energy-kcal_100g": 42, "sugars_100g": 10.6, "carbohydrates_100g": 10.6}
    }));

    assert!(is_beverage(&cola));
    assert!(!is_water(&cola));
    assert_eq!(score_product(&cola).grade, Grade::D);
}

#[test]
fn test_compare_prefers_lower_score() {
    let muesli = product(json!({
        "name": "Muesli",
        "nutriments": {"energy-kcal_100g": 360, "sugars_100g": 6.0, "fiber_100g": 9.5, "proteins_100g": 11.0, "carbohydrates_100g": 60.0}
    }));
    let frosted = product(json!({
        "name": "Frosted Flakes",
        "nutriments": {"energy-kcal_100g": 380, "sugars_100g": 36.0, "fiber_100g": 2.0, "proteins_100g": 5.0, "carbohydrates_100g": 84.0, "sodium_100g": 450}
    }));

    let comparison = compare(&frosted, &muesli);
    assert_eq!(comparison.winner, Winner::Second);
    assert!(comparison.first.report.score > comparison.second.report.score);
    assert_eq!(
        comparison.summary[0],
        format!("Muesli is {} points healthier", comparison.score_difference)
    );
    assert!(comparison.summary.iter().any(|line| line == "Muesli has 83% less sugar"));
    assert!(comparison.summary.iter().any(|line| line == "Muesli has 2.2x more protein"));

    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["winner"], "second");
}

#[test]
fn test_batch_file_to_csv() {
    let mut input = NamedTempFile::new().unwrap();
    input
        .write_all(
            json!([
                {"barcode": "1", "name": "Oats", "nutriments": {"fiber": 10.0, "proteins": 13.0, "carbohydrates": 60.0}},
                {"barcode": "2", "name": "Crisps", "nutriments": {"energy-kcal": 540, "saturated-fat": 4.0, "sodium": 600}},
                {"barcode": "3", "name": "Unknown"}
            ])
            .to_string()
            .as_bytes(),
        )
        .unwrap();

    let products = load_products(input.path()).unwrap();
    let engine = PersonalizationEngine::default();
    let evaluations: Vec<_> = products.iter().map(|p| evaluate(p, None, &engine)).collect();

    let output = NamedTempFile::new().unwrap();
    write_csv(&evaluations, output.path()).unwrap();

    let content = std::fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("rank,product,product_type,score"));
    assert!(lines[1].starts_with("1,Oats,solid,"));
    assert!(lines[3].starts_with("3,Unknown,solid,0,E,E,"));
}
