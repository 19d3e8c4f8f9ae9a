use serde_json::json;

use nutri_grade_rs::evaluation::evaluate;
use nutri_grade_rs::models::{FlagType, Grade, Product, UserProfile};
use nutri_grade_rs::personalize::{personalize, PersonalizationEngine};

fn product(value: serde_json::Value) -> Product {
    serde_json::from_value(value).unwrap()
}

fn profile(value: serde_json::Value) -> UserProfile {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_whey_protein_for_dairy_allergy() {
    let whey = product(json!({
        "name": "Gold Standard Whey",
        "ingredients_text": "Whey protein concentrate, cocoa, emulsifier",
        "nutriments": {"proteins_100g": 78.0, "sugars_100g": 3.0}
    }));
    let user = profile(json!({"allergens": ["Milk/Dairy"]}));

    let analysis = personalize(&whey, &user);
    let dangers: Vec<_> = analysis
        .flags
        .iter()
        .filter(|f| f.kind == FlagType::Danger)
        .collect();

    assert_eq!(dangers.len(), 1);
    assert_eq!(dangers[0].reason, "Contains Milk/Dairy");
    assert!(dangers[0].details.to_lowercase().contains("whey"));
    assert_eq!(analysis.personalized_score, 45);
}

#[test]
fn test_full_profile_flags_in_category_order() {
    let snack = product(json!({
        "name": "Salted Crackers",
        "ingredients_text": "Refined wheat flour, palm oil, salt, milk solids",
        "nutriments": {
            "carbohydrates_100g": 68.0,
            "fiber_100g": 2.0,
            "sodium_100g": 720.0,
            "sugars_100g": 6.0,
            "saturated-fat_100g": 9.0,
            "proteins_100g": 8.0
        },
        "health_grade": "D"
    }));
    let user = profile(json!({
        "allergens": ["Wheat/Gluten"],
        "conditions": ["Hypertension (High BP)", "PCOS / PCOD", "High Cholesterol"],
        "dietType": "Vegetarian",
        "primaryGoal": "Heart Health",
        "customNeeds": ["No palm oil"]
    }));

    let analysis = personalize(&snack, &user);
    let reasons: Vec<&str> = analysis.flags.iter().map(|f| f.reason.as_str()).collect();

    assert_eq!(
        reasons,
        vec![
            "Contains Wheat/Gluten",
            "Sodium Concern",
            "Carb/Fiber Imbalance",
            "Fat Content Concern",
            "Custom Analysis Pending",
        ]
    );
    assert_eq!(analysis.base_grade, Grade::D);
    // 75 - 30 - 15*3 - 5, clamped
    assert_eq!(analysis.personalized_score, 0);
}

#[test]
fn test_success_flags_raise_score() {
    let yogurt = product(json!({
        "name": "Skyr",
        "ingredients_text": "skimmed milk, cultures",
        "nutriments": {"proteins_100g": 17.0, "sugars_100g": 3.5, "saturated-fat_100g": 0.1, "sodium_100g": 40.0}
    }));
    let user = profile(json!({"primaryGoal": "Muscle Gain"}));

    let analysis = personalize(&yogurt, &user);
    assert_eq!(analysis.count(FlagType::Success), 1);
    assert_eq!(analysis.personalized_score, 95);
}

#[test]
fn test_unparsable_value_gives_fallback() {
    let broken = product(json!({
        "name": "Broken",
        "nutriments": {"sodium_100g": {"value": 400}}
    }));
    let user = profile(json!({"conditions": ["Hypertension (High BP)"]}));

    let analysis = personalize(&broken, &user);
    assert_eq!(analysis.personalized_score, 50);
    assert_eq!(analysis.flags.len(), 1);
    assert_eq!(analysis.flags[0].kind, FlagType::Warning);
    assert_eq!(analysis.flags[0].reason, "Analysis Error");
}

#[test]
fn test_personalized_score_always_in_range() {
    let products = [
        product(json!({})),
        product(json!({
            "ingredients_text": "peanuts, cashew, milk, wheat, mustard, soy, egg, sesame, fish",
            "nutriments": {"sugars_100g": 50.0, "sodium_100g": 2000.0, "carbohydrates_100g": 90.0, "saturated-fat_100g": 20.0}
        })),
        product(json!({
            "nutriments": {"proteins_100g": 30.0, "energy-kcal_100g": 100.0, "fiber_100g": 8.0}
        })),
    ];
    let profiles = [
        UserProfile::default(),
        profile(json!({
            "allergens": ["Peanuts", "Milk/Dairy", "Egg", "Soy"],
            "conditions": ["Diabetes / Prediabetes", "Hypertension (High BP)"],
            "dietType": "Vegan"
        })),
        profile(json!({"primaryGoal": "Weight Loss", "customNeeds": ["a", "b", "c"]})),
    ];

    for p in &products {
        for u in &profiles {
            let analysis = personalize(p, u);
            assert!(analysis.personalized_score <= 100);
        }
    }
}

#[test]
fn test_evaluate_combines_score_and_flags() {
    let juice = product(json!({
        "name": "Orange Juice",
        "category": "Beverages",
        "ingredients_text": "orange juice",
        "nutriments": {"energy-kcal_100g": 45, "sugars_100g": 11.0, "carbohydrates_100g": 12.0}
    }));
    let user = profile(json!({"conditions": ["Diabetes / Prediabetes"]}));

    let evaluation = evaluate(&juice, Some(&user), &PersonalizationEngine::default());
    let analysis = evaluation.personalization.unwrap();

    assert!(evaluation.report.product_type.is_beverage());
    assert_eq!(analysis.base_grade, evaluation.report.grade);
    // 11 g sugar is above the diabetes threshold
    assert_eq!(analysis.count(FlagType::Warning), 1);
}

#[test]
fn test_lowercase_stored_grade_is_accepted() {
    let cereal = product(json!({
        "name": "Honey Rings",
        "nutriments": {"sugars_100g": 4.0},
        "health_grade": "d"
    }));

    let analysis = personalize(&cereal, &UserProfile::default());
    assert_eq!(cereal.health_grade, Some(Grade::D));
    assert_eq!(analysis.base_grade, Grade::D);
}
