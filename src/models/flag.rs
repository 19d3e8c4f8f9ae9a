use serde::{Deserialize, Serialize};

use crate::models::grade::Grade;

/// Severity of a personalization finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    Danger,
    Warning,
    Info,
    Success,
}

impl FlagType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagType::Danger => "danger",
            FlagType::Warning => "warning",
            FlagType::Info => "info",
            FlagType::Success => "success",
        }
    }
}

/// One personalization finding for a product and a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub kind: FlagType,
    pub reason: String,
    pub impact: String,
    pub details: String,
}

impl Flag {
    pub fn new(
        kind: FlagType,
        reason: impl Into<String>,
        impact: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            reason: reason.into(),
            impact: impact.into(),
            details: details.into(),
        }
    }
}

/// Result of overlaying a user profile on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedAnalysis {
    pub base_grade: Grade,
    /// Fit score, 0 to 100.
    pub personalized_score: u8,
    pub flags: Vec<Flag>,
}

impl PersonalizedAnalysis {
    pub fn count(&self, kind: FlagType) -> usize {
        self.flags.iter().filter(|f| f.kind == kind).count()
    }
}
