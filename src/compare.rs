use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::evaluation::score_product;
use crate::models::{Nutrient, Product, ScoreReport};
use crate::personalize::NutritionFacts;

/// Which of two compared products is healthier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedProduct {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub report: ScoreReport,
}

/// Side-by-side result of two products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: ComparedProduct,
    pub second: ComparedProduct,
    pub winner: Winner,
    pub score_difference: i32,
    pub summary: Vec<String>,
}

impl Comparison {
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            Winner::First => Some(&self.first.name),
            Winner::Second => Some(&self.second.name),
            Winner::Tie => None,
        }
    }
}

/// Score both products and compare them. A lower INR score is healthier.
///
/// A product without usable nutrition data never beats one that was scored;
/// two such products tie.
pub fn compare(first: &Product, second: &Product) -> Comparison {
    let first_report = score_product(first);
    let second_report = score_product(second);

    let (winner, score_difference) = match (first_report.is_error(), second_report.is_error()) {
        (false, true) => (Winner::First, 0),
        (true, false) => (Winner::Second, 0),
        (true, true) => (Winner::Tie, 0),
        (false, false) => {
            let winner = match first_report.score.cmp(&second_report.score) {
                Ordering::Less => Winner::First,
                Ordering::Greater => Winner::Second,
                Ordering::Equal => Winner::Tie,
            };
            let difference = first_report.score.saturating_sub(second_report.score).saturating_abs();
            (winner, difference)
        }
    };
    let summary = if first_report.is_error() || second_report.is_error() {
        unscored_summary(first, &first_report, second, &second_report)
    } else {
        summarize(first, second, winner, score_difference)
    };

    debug!(?winner, score_difference, "compared products");

    Comparison {
        first: ComparedProduct {
            name: first.display_name(),
            brand: first.brand.clone(),
            category: first.category.clone(),
            report: first_report,
        },
        second: ComparedProduct {
            name: second.display_name(),
            brand: second.brand.clone(),
            category: second.category.clone(),
            report: second_report,
        },
        winner,
        score_difference,
        summary,
    }
}

/// Per-100 value for the summary; unreadable values count as zero.
fn per_100(product: &Product, nutrient: Nutrient) -> f64 {
    NutritionFacts::new(&product.nutriments)
        .get(nutrient)
        .unwrap_or(0.0)
}

fn summarize(first: &Product, second: &Product, winner: Winner, score_difference: i32) -> Vec<String> {
    let first_name = first.display_name();
    let second_name = second.display_name();
    let mut summary = Vec::new();

    summary.push(match winner {
        Winner::First => format!("{} is {} points healthier", first_name, score_difference),
        Winner::Second => format!("{} is {} points healthier", second_name, score_difference),
        Winner::Tie => "Both products have the same health score".to_string(),
    });

    if first.nutriments.is_empty() || second.nutriments.is_empty() {
        return summary;
    }

    let (sugar_a, sugar_b) = (per_100(first, Nutrient::Sugars), per_100(second, Nutrient::Sugars));
    if sugar_a < sugar_b {
        let reduction = (sugar_b - sugar_a) / sugar_b * 100.0;
        summary.push(format!("{} has {:.0}% less sugar", first_name, reduction));
    } else if sugar_b < sugar_a {
        let reduction = (sugar_a - sugar_b) / sugar_a * 100.0;
        summary.push(format!("{} has {:.0}% less sugar", second_name, reduction));
    }

    let (protein_a, protein_b) = (
        per_100(first, Nutrient::Proteins),
        per_100(second, Nutrient::Proteins),
    );
    if protein_a > protein_b {
        summary.push(protein_line(&first_name, protein_a, protein_b));
    } else if protein_b > protein_a {
        summary.push(protein_line(&second_name, protein_b, protein_a));
    }

    summary
}

fn unscored_summary(
    first: &Product,
    first_report: &ScoreReport,
    second: &Product,
    second_report: &ScoreReport,
) -> Vec<String> {
    [(first, first_report), (second, second_report)]
        .into_iter()
        .filter(|(_, report)| report.is_error())
        .map(|(product, _)| format!("{} has no usable nutrition data", product.display_name()))
        .collect()
}

fn protein_line(name: &str, more: f64, less: f64) -> String {
    if less > 0.0 {
        format!("{} has {:.1}x more protein", name, more / less)
    } else {
        format!("{} has more protein", name)
    }
}
