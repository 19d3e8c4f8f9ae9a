use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Dietary preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum DietType {
    #[default]
    General,
    Vegan,
    Vegetarian,
    Keto,
    Paleo,
    Mediterranean,
    LowCarb,
}

impl DietType {
    pub const ALL: [DietType; 7] = [
        DietType::General,
        DietType::Vegan,
        DietType::Vegetarian,
        DietType::Keto,
        DietType::Paleo,
        DietType::Mediterranean,
        DietType::LowCarb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietType::General => "General",
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::Keto => "Keto",
            DietType::Paleo => "Paleo",
            DietType::Mediterranean => "Mediterranean",
            DietType::LowCarb => "Low Carb",
        }
    }
}

impl From<String> for DietType {
    fn from(value: String) -> Self {
        let wanted = value.trim();
        match DietType::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
        {
            Some(diet) => diet,
            None => {
                tracing::warn!(diet = wanted, "unknown diet type, treating as General");
                DietType::General
            }
        }
    }
}

impl Serialize for DietType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Health condition with nutrient-threshold rules. Anything else is kept
/// verbatim and has no rule attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    Pcos,
    HighCholesterol,
    Other(String),
}

impl HealthCondition {
    pub const KNOWN: [HealthCondition; 4] = [
        HealthCondition::Diabetes,
        HealthCondition::Hypertension,
        HealthCondition::Pcos,
        HealthCondition::HighCholesterol,
    ];

    pub fn label(&self) -> &str {
        match self {
            HealthCondition::Diabetes => "Diabetes / Prediabetes",
            HealthCondition::Hypertension => "Hypertension (High BP)",
            HealthCondition::Pcos => "PCOS / PCOD",
            HealthCondition::HighCholesterol => "High Cholesterol",
            HealthCondition::Other(label) => label,
        }
    }
}

impl From<String> for HealthCondition {
    fn from(value: String) -> Self {
        let wanted = value.trim();
        HealthCondition::KNOWN
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| HealthCondition::Other(wanted.to_string()))
    }
}

impl Serialize for HealthCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary health goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum HealthGoal {
    MuscleGain,
    WeightLoss,
    HeartHealth,
    SugarControl,
    Other(String),
}

impl HealthGoal {
    pub const KNOWN: [HealthGoal; 4] = [
        HealthGoal::MuscleGain,
        HealthGoal::WeightLoss,
        HealthGoal::HeartHealth,
        HealthGoal::SugarControl,
    ];

    pub fn label(&self) -> &str {
        match self {
            HealthGoal::MuscleGain => "Muscle Gain",
            HealthGoal::WeightLoss => "Weight Loss",
            HealthGoal::HeartHealth => "Heart Health",
            HealthGoal::SugarControl => "Sugar Control",
            HealthGoal::Other(label) => label,
        }
    }
}

impl From<String> for HealthGoal {
    fn from(value: String) -> Self {
        let wanted = value.trim();
        HealthGoal::KNOWN
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| HealthGoal::Other(wanted.to_string()))
    }
}

impl Serialize for HealthGoal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The engine's view of a user. Supplied per call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub allergens: BTreeSet<String>,

    #[serde(default, alias = "health_conditions")]
    pub conditions: BTreeSet<HealthCondition>,

    #[serde(default, alias = "dietary_preference")]
    pub diet_type: Option<DietType>,

    #[serde(default, alias = "primary_goal")]
    pub primary_goal: Option<HealthGoal>,

    #[serde(default, alias = "custom_needs")]
    pub custom_needs: Vec<String>,
}

impl UserProfile {
    /// Effective diet; an unset preference means no restrictions.
    pub fn diet(&self) -> DietType {
        self.diet_type.unwrap_or_default()
    }

    pub fn has_goal(&self, goal: &HealthGoal) -> bool {
        self.primary_goal.as_ref() == Some(goal)
    }
}
