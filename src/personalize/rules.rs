//! The five rule categories. Each returns its flags in a fixed order and
//! knows nothing about the other categories.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::Result;
use crate::models::{DietType, Flag, FlagType, HealthCondition, HealthGoal, Nutrient, UserProfile};
use crate::personalize::facts::NutritionFacts;
use crate::personalize::keywords::KeywordTables;

// ─────────────────────────────────────────────────────────────────────────────
// Thresholds, all per 100 g/ml
// ─────────────────────────────────────────────────────────────────────────────

pub const SUGAR_WARNING_G: f64 = 10.0;
pub const ADDED_SUGAR_WARNING_PERCENT: f64 = 5.0;
pub const SODIUM_WARNING_MG: f64 = 400.0;
pub const PCOS_CARBS_G: f64 = 40.0;
pub const PCOS_MIN_FIBER_G: f64 = 3.0;
pub const CHOLESTEROL_SAT_FAT_G: f64 = 4.0;
pub const CHOLESTEROL_TRANS_FAT_G: f64 = 0.1;

pub const KETO_NET_CARBS_G: f64 = 7.0;
pub const LOW_CARB_CARBS_G: f64 = 20.0;

pub const MUSCLE_GAIN_PROTEIN_G: f64 = 15.0;
pub const WEIGHT_LOSS_MAX_KCAL: f64 = 150.0;
pub const WEIGHT_LOSS_MIN_FIBER_G: f64 = 4.0;
pub const HEART_HEALTH_MAX_SAT_FAT_G: f64 = 2.0;
pub const HEART_HEALTH_MAX_SODIUM_MG: f64 = 200.0;
pub const SUGAR_CONTROL_MAX_SUGAR_G: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Fit score
// ─────────────────────────────────────────────────────────────────────────────

pub const BASE_FIT_SCORE: i32 = 75;
pub const FALLBACK_FIT_SCORE: u8 = 50;

pub fn flag_weight(kind: FlagType) -> i32 {
    match kind {
        FlagType::Danger => -30,
        FlagType::Warning => -15,
        FlagType::Info => -5,
        FlagType::Success => 20,
    }
}

/// `clamp(0, 100, 75 + Σ weight)`.
pub fn personalized_score(flags: &[Flag]) -> u8 {
    let total: i32 = flags.iter().map(|f| flag_weight(f.kind)).sum();
    (BASE_FIT_SCORE + total).clamp(0, 100) as u8
}

/// The whole word around `keyword` in `ingredients`, or the keyword itself.
pub fn find_matched_ingredient(keyword: &str, ingredients: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r"(?i)\b\w*{}\w*\b", regex::escape(keyword)))?;
    Ok(pattern
        .find(ingredients)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| keyword.to_string()))
}

/// Category 1: one danger flag per allergen with a keyword in the ingredients.
pub fn check_allergens(
    allergens: &BTreeSet<String>,
    ingredients: &str,
    tables: &KeywordTables,
) -> Result<Vec<Flag>> {
    let mut flags = Vec::new();

    for allergen in allergens {
        let Some(keywords) = tables.allergen_keywords(allergen) else {
            tracing::debug!(allergen = %allergen, "no keyword table for allergen");
            continue;
        };

        if let Some(keyword) = keywords.iter().find(|k| ingredients.contains(k.as_str())) {
            let matched = find_matched_ingredient(keyword, ingredients)?;
            flags.push(Flag::new(
                FlagType::Danger,
                format!("Contains {}", allergen),
                "Allergen detected - click for details",
                format!(
                    "UNSAFE: Contains '{}' which matches your {} allergy. This ingredient was found in the product ingredients list.",
                    matched, allergen
                ),
            ));
        }
    }

    Ok(flags)
}

fn sugar_warning(facts: &NutritionFacts, subject: &str) -> Result<Option<Flag>> {
    let sugars = facts.get(Nutrient::Sugars)?;
    let added_sugar = facts.added_sugar_percent()?;
    if sugars <= SUGAR_WARNING_G && added_sugar <= ADDED_SUGAR_WARNING_PERCENT {
        return Ok(None);
    }

    let mut details = format!(
        "High sugar content detected: {:.1}g sugar per 100g",
        sugars
    );
    if added_sugar > ADDED_SUGAR_WARNING_PERCENT {
        details.push_str(&format!(" ({:.1}% added sugar)", added_sugar));
    }
    details.push_str(&format!(
        ". This may affect glucose levels for {}.",
        subject
    ));

    Ok(Some(Flag::new(
        FlagType::Warning,
        "Sugar Concern",
        "May affect glucose levels - click for details",
        details,
    )))
}

fn sodium_warning(facts: &NutritionFacts, subject: &str) -> Result<Option<Flag>> {
    let sodium = facts.get(Nutrient::Sodium)?;
    if sodium <= SODIUM_WARNING_MG {
        return Ok(None);
    }

    Ok(Some(Flag::new(
        FlagType::Warning,
        "Sodium Concern",
        "May affect blood pressure - click for details",
        format!(
            "High sodium content: {:.1}mg per 100g. This may affect blood pressure for {}.",
            sodium, subject
        ),
    )))
}

fn carb_fiber_warning(facts: &NutritionFacts, subject: &str) -> Result<Option<Flag>> {
    let carbs = facts.get(Nutrient::Carbohydrates)?;
    let fiber = facts.get(Nutrient::Fiber)?;
    if !(carbs > PCOS_CARBS_G && fiber < PCOS_MIN_FIBER_G) {
        return Ok(None);
    }

    Ok(Some(Flag::new(
        FlagType::Warning,
        "Carb/Fiber Imbalance",
        "May affect hormonal balance - click for details",
        format!(
            "High glycemic load detected: {:.1}g carbs with only {:.1}g fiber per 100g. This carb/fiber ratio may affect hormonal balance for {}.",
            carbs, fiber, subject
        ),
    )))
}

fn fat_warning(facts: &NutritionFacts, subject: &str) -> Result<Option<Flag>> {
    let sat_fat = facts.get(Nutrient::SaturatedFat)?;
    let trans_fat = facts.get(Nutrient::TransFat)?;

    let mut parts = Vec::new();
    if sat_fat > CHOLESTEROL_SAT_FAT_G {
        parts.push(format!("{:.1}g saturated fat", sat_fat));
    }
    if trans_fat > CHOLESTEROL_TRANS_FAT_G {
        parts.push(format!("{:.1}g trans fat", trans_fat));
    }
    if parts.is_empty() {
        return Ok(None);
    }

    Ok(Some(Flag::new(
        FlagType::Warning,
        "Fat Content Concern",
        "May affect cholesterol levels - click for details",
        format!(
            "Contains {} per 100g. This may affect cholesterol levels for {}.",
            parts.join(" and "),
            subject
        ),
    )))
}

/// Category 2: warnings for health conditions.
///
/// Each condition runs its own check. The Sugar Control and Heart Health
/// goals run the sugar and sodium checks too, unless a condition already
/// produced that warning.
pub fn check_health_conditions(profile: &UserProfile, facts: &NutritionFacts) -> Result<Vec<Flag>> {
    let mut flags = Vec::new();
    let mut sugar_checked = false;
    let mut sodium_checked = false;

    for condition in &profile.conditions {
        let subject = format!("individuals with {}", condition);
        let flag = match condition {
            HealthCondition::Diabetes => {
                sugar_checked = true;
                sugar_warning(facts, &subject)?
            }
            HealthCondition::Hypertension => {
                sodium_checked = true;
                sodium_warning(facts, &subject)?
            }
            HealthCondition::Pcos => carb_fiber_warning(facts, &subject)?,
            HealthCondition::HighCholesterol => fat_warning(facts, &subject)?,
            HealthCondition::Other(_) => None,
        };
        flags.extend(flag);
    }

    if !sugar_checked && profile.has_goal(&HealthGoal::SugarControl) {
        let subject = format!("a {} goal", HealthGoal::SugarControl);
        flags.extend(sugar_warning(facts, &subject)?);
    }
    if !sodium_checked && profile.has_goal(&HealthGoal::HeartHealth) {
        let subject = format!("a {} goal", HealthGoal::HeartHealth);
        flags.extend(sodium_warning(facts, &subject)?);
    }

    Ok(flags)
}

fn restricted_terms<'a>(keywords: &'a [String], ingredients: &str) -> Vec<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .filter(|k| ingredients.contains(k))
        .collect()
}

/// Category 3: informational flags for the dietary preference.
pub fn check_dietary_preference(
    diet: DietType,
    ingredients: &str,
    facts: &NutritionFacts,
    tables: &KeywordTables,
) -> Result<Vec<Flag>> {
    let flag = match diet {
        DietType::General | DietType::Mediterranean => None,
        DietType::Vegan | DietType::Vegetarian => {
            let found = restricted_terms(tables.diet_keywords(diet), ingredients);
            (!found.is_empty()).then(|| {
                Flag::new(
                    FlagType::Info,
                    format!("Not suitable for {}", diet),
                    "Contains restricted ingredients - click for details",
                    format!(
                        "This product contains {} which are not suitable for a {} diet.",
                        found.join(", "),
                        diet.label().to_lowercase()
                    ),
                )
            })
        }
        DietType::Paleo => {
            let found = restricted_terms(tables.diet_keywords(diet), ingredients);
            (!found.is_empty()).then(|| {
                Flag::new(
                    FlagType::Info,
                    format!("Not suitable for {}", diet),
                    "Contains modern foods - click for details",
                    format!(
                        "This product contains {} which are not part of the Paleo diet (focuses on foods available to Paleolithic humans).",
                        found.join(", ")
                    ),
                )
            })
        }
        DietType::Keto => {
            let carbs = facts.get(Nutrient::Carbohydrates)?;
            let fiber = facts.get(Nutrient::Fiber)?;
            let net_carbs = carbs - fiber;
            (net_carbs > KETO_NET_CARBS_G).then(|| {
                Flag::new(
                    FlagType::Info,
                    "High Net Carbs",
                    "May not suit Keto diet - click for details",
                    format!(
                        "This product contains {:.1}g net carbs per 100g (total carbs: {:.1}g minus fiber: {:.1}g). For Keto diets, aim for less than 20-50g net carbs per day.",
                        net_carbs, carbs, fiber
                    ),
                )
            })
        }
        DietType::LowCarb => {
            let carbs = facts.get(Nutrient::Carbohydrates)?;
            (carbs > LOW_CARB_CARBS_G).then(|| {
                Flag::new(
                    FlagType::Info,
                    "High Carbohydrate Content",
                    "May not suit Low Carb diet - click for details",
                    format!(
                        "This product contains {:.1}g carbohydrates per 100g. For Low Carb diets, aim for less than 50-100g carbs per day.",
                        carbs
                    ),
                )
            })
        }
    };

    Ok(flag.into_iter().collect())
}

/// Category 4: success flag when the product supports the primary goal.
pub fn check_health_goal(goal: Option<&HealthGoal>, facts: &NutritionFacts) -> Result<Vec<Flag>> {
    let Some(goal) = goal else {
        return Ok(Vec::new());
    };

    let flag = match goal {
        HealthGoal::MuscleGain => {
            let protein = facts.get(Nutrient::Proteins)?;
            (protein > MUSCLE_GAIN_PROTEIN_G).then(|| {
                Flag::new(
                    FlagType::Success,
                    "High Protein Content",
                    "Excellent for muscle gain - click for details",
                    format!(
                        "This product contains {:.1}g protein per 100g, which is excellent for supporting muscle growth and repair. Aim for 1.6-2.2g of protein per kg of body weight daily.",
                        protein
                    ),
                )
            })
        }
        HealthGoal::WeightLoss => {
            let energy = facts.get(Nutrient::EnergyKcal)?;
            let fiber = facts.get(Nutrient::Fiber)?;
            (energy < WEIGHT_LOSS_MAX_KCAL && fiber > WEIGHT_LOSS_MIN_FIBER_G).then(|| {
                Flag::new(
                    FlagType::Success,
                    "Low Calorie & High Fiber",
                    "Supports weight loss goals - click for details",
                    format!(
                        "This product has only {:.0} calories and {:.1}g fiber per 100g. High-fiber, low-calorie foods help with satiety and weight management.",
                        energy, fiber
                    ),
                )
            })
        }
        HealthGoal::HeartHealth => {
            let sat_fat = facts.get(Nutrient::SaturatedFat)?;
            let sodium = facts.get(Nutrient::Sodium)?;
            (sat_fat < HEART_HEALTH_MAX_SAT_FAT_G && sodium < HEART_HEALTH_MAX_SODIUM_MG).then(|| {
                Flag::new(
                    FlagType::Success,
                    "Heart Healthy Profile",
                    "Supports cardiovascular health - click for details",
                    format!(
                        "This product contains only {:.1}g saturated fat and {:.0}mg sodium per 100g, making it suitable for heart health goals.",
                        sat_fat, sodium
                    ),
                )
            })
        }
        HealthGoal::SugarControl => {
            let sugars = facts.get(Nutrient::Sugars)?;
            (sugars < SUGAR_CONTROL_MAX_SUGAR_G).then(|| {
                Flag::new(
                    FlagType::Success,
                    "Low Sugar Content",
                    "Supports blood sugar management - click for details",
                    format!(
                        "This product contains only {:.1}g sugar per 100g, which is beneficial for maintaining stable blood sugar levels.",
                        sugars
                    ),
                )
            })
        }
        HealthGoal::Other(_) => None,
    };

    Ok(flag.into_iter().collect())
}

/// Category 5: one pending-review flag per custom need, echoed verbatim.
pub fn check_custom_needs(custom_needs: &[String]) -> Vec<Flag> {
    custom_needs
        .iter()
        .map(|need| {
            Flag::new(
                FlagType::Info,
                "Custom Analysis Pending",
                "Expert review in progress - click for details",
                format!(
                    "Our nutrition experts are currently reviewing '{}' for personalized analysis. We'll provide specific recommendations once the review is complete.",
                    need
                ),
            )
        })
        .collect()
}
