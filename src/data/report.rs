use std::path::Path;

use crate::error::Result;
use crate::evaluation::Evaluation;

const HEADER: [&str; 16] = [
    "rank",
    "product",
    "product_type",
    "score",
    "initial_grade",
    "grade",
    "baseline_points",
    "positive_points",
    "energy_points",
    "sat_fat_points",
    "sugar_points",
    "sodium_points",
    "fiber_points",
    "protein_points",
    "fvnl_points",
    "completeness",
];

/// Write one row per evaluated product, in the order given.
///
/// Point columns are left empty for products that could not be scored.
pub fn write_csv(evaluations: &[Evaluation], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for (i, evaluation) in evaluations.iter().enumerate() {
        let report = &evaluation.report;
        let mut record = vec![
            (i + 1).to_string(),
            evaluation.product_name.clone(),
            report.product_type.to_string(),
            report.score.to_string(),
            report.initial_grade.to_string(),
            report.grade.to_string(),
        ];

        match &report.breakdown {
            Some(b) => record.extend(
                [
                    b.baseline_points,
                    b.positive_points,
                    b.energy_points,
                    b.sat_fat_points,
                    b.sugar_points,
                    b.sodium_points,
                    b.fiber_points,
                    b.protein_points,
                    b.fvnl_points,
                ]
                .map(|points| points.to_string()),
            ),
            None => record.extend(std::iter::repeat_n(String::new(), 9)),
        }

        record.push(format!(
            "{:.2}",
            report.normalized_nutrition.completeness()
        ));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
