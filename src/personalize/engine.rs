use std::sync::LazyLock;

use tracing::{debug, error};

use crate::error::Result;
use crate::models::{Flag, FlagType, Grade, PersonalizedAnalysis, Product, UserProfile};
use crate::personalize::facts::NutritionFacts;
use crate::personalize::keywords::KeywordTables;
use crate::personalize::rules::{self, FALLBACK_FIT_SCORE};

static DEFAULT_ENGINE: LazyLock<PersonalizationEngine> =
    LazyLock::new(|| PersonalizationEngine::new(KeywordTables::default()));

/// Grade assumed when the product carries none.
pub const DEFAULT_BASE_GRADE: Grade = Grade::C;

/// Overlays a user profile on a product and produces flags plus a fit
/// score. Holds only read-only keyword tables, so one engine can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PersonalizationEngine {
    keywords: KeywordTables,
}

impl PersonalizationEngine {
    pub fn new(keywords: KeywordTables) -> Self {
        Self {
            keywords: keywords.normalized(),
        }
    }

    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    /// Never fails: any error while reading the product produces the
    /// fallback analysis instead.
    pub fn personalize(&self, product: &Product, profile: &UserProfile) -> PersonalizedAnalysis {
        let base_grade = product.health_grade.unwrap_or(DEFAULT_BASE_GRADE);

        match self.collect_flags(product, profile) {
            Ok(flags) => {
                let personalized_score = rules::personalized_score(&flags);
                debug!(
                    product = %product.display_name(),
                    flags = flags.len(),
                    personalized_score,
                    "personalized analysis complete"
                );
                PersonalizedAnalysis {
                    base_grade,
                    personalized_score,
                    flags,
                }
            }
            Err(e) => {
                error!(product = %product.display_name(), error = %e, "personalized analysis failed");
                fallback_analysis(base_grade)
            }
        }
    }

    fn collect_flags(&self, product: &Product, profile: &UserProfile) -> Result<Vec<Flag>> {
        let ingredients = product.ingredients_lower();
        let facts = NutritionFacts::new(&product.nutriments);

        let mut flags = rules::check_allergens(&profile.allergens, &ingredients, &self.keywords)?;
        flags.extend(rules::check_health_conditions(profile, &facts)?);
        flags.extend(rules::check_dietary_preference(
            profile.diet(),
            &ingredients,
            &facts,
            &self.keywords,
        )?);
        flags.extend(rules::check_health_goal(profile.primary_goal.as_ref(), &facts)?);
        flags.extend(rules::check_custom_needs(&profile.custom_needs));

        Ok(flags)
    }
}

fn fallback_analysis(base_grade: Grade) -> PersonalizedAnalysis {
    PersonalizedAnalysis {
        base_grade,
        personalized_score: FALLBACK_FIT_SCORE,
        flags: vec![Flag::new(
            FlagType::Warning,
            "Analysis Error",
            "Unable to perform personalized analysis",
            "An error occurred while analyzing this product for your profile.",
        )],
    }
}

/// Personalize with the built-in keyword tables.
pub fn personalize(product: &Product, profile: &UserProfile) -> PersonalizedAnalysis {
    DEFAULT_ENGINE.personalize(product, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietType, HealthCondition, HealthGoal};
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_profile_keeps_base_score() {
        let p = product(json!({"name": "Oats", "ingredients_text": "rolled oats"}));
        let analysis = personalize(&p, &UserProfile::default());
        assert_eq!(analysis.base_grade, Grade::C);
        assert_eq!(analysis.personalized_score, 75);
        assert!(analysis.flags.is_empty());
    }

    #[test]
    fn test_category_order() {
        let p = product(json!({
            "ingredients_text": "Peanuts, sugar, honey",
            "nutriments": {"sugars_100g": 30.0, "proteins_100g": 20.0},
            "health_grade": "D"
        }));
        let profile = UserProfile {
            allergens: ["Peanuts".to_string()].into(),
            conditions: [HealthCondition::Diabetes].into(),
            diet_type: Some(DietType::Vegan),
            primary_goal: Some(HealthGoal::MuscleGain),
            custom_needs: vec!["Low FODMAP".to_string()],
        };

        let analysis = personalize(&p, &profile);
        let kinds: Vec<FlagType> = analysis.flags.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FlagType::Danger,
                FlagType::Warning,
                FlagType::Info,
                FlagType::Success,
                FlagType::Info
            ]
        );
        assert_eq!(analysis.base_grade, Grade::D);
        // 75 - 30 - 15 - 5 + 20 - 5
        assert_eq!(analysis.personalized_score, 40);
    }

    #[test]
    fn test_malformed_nutrient_falls_back() {
        let p = product(json!({"nutriments": {"sugars_100g": "lots"}}));
        let profile = UserProfile {
            conditions: [HealthCondition::Diabetes].into(),
            ..Default::default()
        };

        let analysis = personalize(&p, &profile);
        assert_eq!(analysis.personalized_score, 50);
        assert_eq!(analysis.flags.len(), 1);
        assert_eq!(analysis.flags[0].reason, "Analysis Error");
    }

    #[test]
    fn test_malformed_field_not_read_is_harmless() {
        let p = product(json!({
            "ingredients_text": "whey powder",
            "nutriments": {"sugars_100g": "lots"}
        }));
        let profile = UserProfile {
            allergens: ["Milk/Dairy".to_string()].into(),
            ..Default::default()
        };

        let analysis = personalize(&p, &profile);
        assert_eq!(analysis.count(FlagType::Danger), 1);
        assert_eq!(analysis.personalized_score, 45);
    }

    #[test]
    fn test_custom_keyword_tables() {
        let tables: KeywordTables =
            serde_json::from_value(json!({"allergens": {"Lupin": ["LUPIN"]}})).unwrap();
        let engine = PersonalizationEngine::new(tables);
        let p = product(json!({"ingredients_text": "Lupin flour"}));
        let profile = UserProfile {
            allergens: ["Lupin".to_string()].into(),
            ..Default::default()
        };

        let analysis = engine.personalize(&p, &profile);
        assert_eq!(analysis.count(FlagType::Danger), 1);
        assert!(analysis.flags[0].details.contains("'lupin'"));
    }
}
