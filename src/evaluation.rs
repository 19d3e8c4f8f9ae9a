use serde::Serialize;
use tracing::debug;

use crate::classify::{is_water, product_type};
use crate::models::{PersonalizedAnalysis, Product, ScoreReport, UserProfile};
use crate::personalize::PersonalizationEngine;
use crate::scoring::{calculate_score, parse_serving_size};

/// Score and, optionally, personalization for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub product_name: String,
    pub report: ScoreReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization: Option<PersonalizedAnalysis>,
}

/// Classify, normalize and score a product record.
pub fn score_product(product: &Product) -> ScoreReport {
    let kind = product_type(product);
    let water = is_water(product);
    let serving_size = product.serving_size.as_ref().and_then(parse_serving_size);

    debug!(
        product = %product.display_name(),
        product_type = %kind,
        water,
        serving_size,
        "scoring product"
    );

    calculate_score(&product.nutriments, serving_size, kind.is_beverage(), water)
}

/// Score a product, then overlay the profile when one is given.
///
/// A product without a stored grade is personalized against the grade
/// just computed, unless scoring failed for lack of data.
pub fn evaluate(
    product: &Product,
    profile: Option<&UserProfile>,
    engine: &PersonalizationEngine,
) -> Evaluation {
    let report = score_product(product);

    let personalization = profile.map(|profile| {
        if product.health_grade.is_none() && !report.is_error() {
            let graded = Product {
                health_grade: Some(report.grade),
                ..product.clone()
            };
            engine.personalize(&graded, profile)
        } else {
            engine.personalize(product, profile)
        }
    });

    Evaluation {
        product_name: product.display_name(),
        report,
        personalization,
    }
}
