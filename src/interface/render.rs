use crate::compare::Comparison;
use crate::evaluation::Evaluation;
use crate::models::{FlagType, PersonalizedAnalysis, ScoreReport};

fn flag_marker(kind: FlagType) -> &'static str {
    match kind {
        FlagType::Danger => "[!!]",
        FlagType::Warning => "[! ]",
        FlagType::Info => "[i ]",
        FlagType::Success => "[ok]",
    }
}

/// Display a score report with its breakdown.
pub fn display_score_report(name: &str, report: &ScoreReport) {
    println!();
    println!("=== {} ===", name);
    println!();

    if let Some(error) = &report.error {
        println!("Grade {} (score {}): {}", report.grade, report.score, error);
        return;
    }

    let capped = if report.grade != report.initial_grade {
        format!(" (capped from {})", report.initial_grade)
    } else {
        String::new()
    };
    let water = if report.is_water { ", water" } else { "" };

    println!(
        "Grade {}{} | score {} | {}{}",
        report.grade, capped, report.score, report.product_type, water
    );

    if let Some(b) = &report.breakdown {
        println!();
        println!(
            "  Baseline {:>3}  = energy {} + sat fat {} + sugar {} + sodium {}",
            b.baseline_points, b.energy_points, b.sat_fat_points, b.sugar_points, b.sodium_points
        );
        println!(
            "  Positive {:>3}  = fiber {} + protein {} + FVNL {}",
            b.positive_points, b.fiber_points, b.protein_points, b.fvnl_points
        );
    }

    if !report.factors.strengths.is_empty() {
        println!();
        println!("Strengths: {}", report.factors.strengths.join(", "));
    }
    if !report.factors.concerns.is_empty() {
        println!("Concerns:  {}", report.factors.concerns.join(", "));
    }

    if !report.missing_nutrients.is_empty() {
        let missing: Vec<&str> = report.missing_nutrients.iter().map(|n| n.key()).collect();
        println!();
        println!(
            "Data completeness {:.0}% (missing: {})",
            report.normalized_nutrition.completeness() * 100.0,
            missing.join(", ")
        );
    }
}

/// Display personalized flags, most severe category first as produced.
pub fn display_personalization(analysis: &PersonalizedAnalysis) {
    println!();
    println!(
        "Personal fit: {}/100 (base grade {})",
        analysis.personalized_score, analysis.base_grade
    );

    if analysis.flags.is_empty() {
        println!("  No concerns for your profile.");
        return;
    }

    for flag in &analysis.flags {
        println!("  {} {}: {}", flag_marker(flag.kind), flag.reason, flag.impact);
        println!("       {}", flag.details);
    }
}

pub fn display_evaluation(evaluation: &Evaluation) {
    display_score_report(&evaluation.product_name, &evaluation.report);
    if let Some(analysis) = &evaluation.personalization {
        display_personalization(analysis);
    }
}

pub fn display_comparison(comparison: &Comparison) {
    println!();
    println!("=== Comparison ===");
    println!();

    let name_width = comparison.first.name.len().max(comparison.second.name.len());
    for side in [&comparison.first, &comparison.second] {
        println!(
            "  {:<width$}  grade {}  score {:>4}",
            side.name,
            side.report.grade,
            side.report.score,
            width = name_width
        );
    }

    println!();
    for line in &comparison.summary {
        println!("  - {}", line);
    }
}

/// One line per product for batch runs.
pub fn display_batch_summary(evaluations: &[Evaluation]) {
    println!();
    println!("=== Batch ({} products) ===", evaluations.len());
    println!();

    let name_width = evaluations
        .iter()
        .map(|e| e.product_name.len())
        .max()
        .unwrap_or(10);

    for (i, evaluation) in evaluations.iter().enumerate() {
        let report = &evaluation.report;
        let fit = evaluation
            .personalization
            .as_ref()
            .map(|p| format!("  fit {:>3}", p.personalized_score))
            .unwrap_or_default();
        let note = report.error.as_deref().unwrap_or("");
        println!(
            "{:>3}. {:<width$}  {}  {:>4}{}  {}",
            i + 1,
            evaluation.product_name,
            report.grade,
            report.score,
            fit,
            note,
            width = name_width
        );
    }
}
