use serde_json::Value;

use crate::error::{GradeError, Result};
use crate::models::{Nutrient, RawNutriments};

const ADDED_SUGAR_KEY: &str = "added_sugar_percent";

/// Per-100 g/ml reads over a product's raw nutriments.
///
/// Values are read lazily so that a malformed field only fails the rules
/// that actually look at it. Absent, null and blank values read as zero.
#[derive(Debug, Clone, Copy)]
pub struct NutritionFacts<'a> {
    raw: &'a RawNutriments,
}

impl<'a> NutritionFacts<'a> {
    pub fn new(raw: &'a RawNutriments) -> Self {
        Self { raw }
    }

    /// The `_100g` field, falling back to the bare key.
    pub fn get(&self, nutrient: Nutrient) -> Result<f64> {
        let key = nutrient.per_100_key();
        match self.raw.get(key) {
            Some(value) if !value.is_null() => read_value(key, value),
            _ => match self.raw.get(nutrient.key()) {
                Some(value) => read_value(nutrient.key(), value),
                None => Ok(0.0),
            },
        }
    }

    pub fn added_sugar_percent(&self) -> Result<f64> {
        match self.raw.get(ADDED_SUGAR_KEY) {
            Some(value) => read_value(ADDED_SUGAR_KEY, value),
            None => Ok(0.0),
        }
    }
}

fn invalid(key: &str, value: impl ToString) -> GradeError {
    GradeError::InvalidNutrient {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn read_value(key: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Null => return Ok(0.0),
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(key, n))?,
        Value::String(s) if s.trim().is_empty() => return Ok(0.0),
        Value::String(s) => s
            .replace(',', "")
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(key, s))?,
        other => return Err(invalid(key, other)),
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid(key, parsed))
    }
}
