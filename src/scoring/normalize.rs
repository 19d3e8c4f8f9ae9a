use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::models::{Nutrient, NutrientMap, RawNutriments};
use crate::scoring::constants::per_serving_limit;

/// Raw key whose value marks every field as per serving.
const SERVING_UNIT_KEY: &str = "serving_size_unit";

/// Leading amount of a serving size: `1,000.5` (thousands groups) in group 1,
/// otherwise `30`, `1.5` or `1,5` (decimal comma) in group 2.
static SERVING_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d{1,3}(?:,\d{3})+(?:\.\d+)?)(?:\D|$)|(\d+(?:[.,]\d+)?))")
        .expect("serving size pattern should be valid")
});

/// Parse one raw nutrient value.
///
/// Numbers pass through; numeric text is parsed after dropping thousands
/// separators. Anything else, and negative or non-finite results, is `None`.
pub fn parse_nutrient_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    }?;

    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Serving size in grams/ml from a number or text such as `"30 g"`.
pub fn parse_serving_size(value: &Value) -> Option<f64> {
    let size = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => SERVING_SIZE_RE.captures(s).and_then(|caps| {
            let amount = match (caps.get(1), caps.get(2)) {
                (Some(grouped), _) => grouped.as_str().replace(',', ""),
                (None, Some(plain)) => plain.as_str().replace(',', "."),
                (None, None) => return None,
            };
            amount.parse::<f64>().ok()
        }),
        _ => None,
    }?;

    (size.is_finite() && size > 0.0).then_some(size)
}

/// Parsed value for a nutrient: the bare key first, then the `_100g` key.
/// A present but malformed value falls through to the next key.
fn lookup(raw: &RawNutriments, nutrient: Nutrient) -> Option<f64> {
    [nutrient.key(), nutrient.per_100_key()]
        .into_iter()
        .filter_map(|key| raw.get(key).map(|value| (key, value)))
        .filter(|(_, v)| !v.is_null() && v.as_str().is_none_or(|s| !s.trim().is_empty()))
        .find_map(|(key, raw_value)| {
            let parsed = parse_nutrient_value(raw_value);
            if parsed.is_none() {
                warn!(nutrient = %nutrient, key, value = %raw_value, "could not normalize field");
            }
            parsed
        })
}

/// Convert raw nutriments into a per-100 g/ml [`NutrientMap`].
///
/// When `serving_size` is given, values that cannot be per 100 g/ml
/// (see [`per_serving_limit`]) are rescaled by `value / serving_size * 100`.
/// Malformed fields are skipped; this never fails.
pub fn normalize(raw: &RawNutriments, serving_size: Option<f64>) -> NutrientMap {
    let mut normalized = NutrientMap::default();
    if raw.is_empty() {
        return normalized;
    }

    let serving = serving_size.filter(|s| s.is_finite() && *s > 0.0);
    let all_per_serving = raw
        .get(SERVING_UNIT_KEY)
        .and_then(Value::as_str)
        .is_some_and(|unit| unit.to_lowercase().contains("per_serving"));

    for (key, _) in raw.iter().filter(|(k, _)| Nutrient::from_key(k).is_none()) {
        trace!(key = %key, "ignoring unrecognized nutriment field");
    }

    for nutrient in Nutrient::ALL {
        let Some(mut value) = lookup(raw, nutrient) else {
            continue;
        };

        if let Some(size) = serving {
            let implausible = per_serving_limit(nutrient).is_some_and(|limit| value > limit);
            if all_per_serving || implausible {
                let rescaled = value / size * 100.0;
                debug!(nutrient = %nutrient, value, rescaled, serving = size, "rescaled per-serving value");
                value = rescaled;
            }
        }

        normalized.set(nutrient, value);
    }

    let carbohydrates = normalized.value(Nutrient::Carbohydrates);
    if carbohydrates > 0.0 {
        let fiber = normalized.value(Nutrient::Fiber);
        let protein = normalized.value(Nutrient::Proteins);
        normalized.fvnl_percent = Some(((fiber + protein) / carbohydrates * 100.0).clamp(0.0, 100.0));

        let sugars = normalized.value(Nutrient::Sugars);
        if sugars > 0.0 {
            normalized.added_sugar_percent = Some((sugars / carbohydrates * 100.0).clamp(0.0, 100.0));
        }
    }

    debug!(?normalized, "normalized nutrition data");
    normalized
}
