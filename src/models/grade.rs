use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// Letter grade. Ordering follows quality: `A < B < ... < E`, so a
/// "worse" grade compares greater. Deserializes case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Grade that cannot be better than `ceiling`.
    pub fn capped_at(self, ceiling: Grade) -> Grade {
        self.max(ceiling)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            other => Err(GradeError::InvalidInput(format!("unknown grade '{}'", other))),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = GradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which grading scale applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Solid,
    Beverage,
}

impl ProductType {
    pub fn from_beverage_flag(is_beverage: bool) -> Self {
        if is_beverage {
            ProductType::Beverage
        } else {
            ProductType::Solid
        }
    }

    pub fn is_beverage(self) -> bool {
        self == ProductType::Beverage
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Solid => f.write_str("solid"),
            ProductType::Beverage => f.write_str("beverage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_at() {
        assert_eq!(Grade::A.capped_at(Grade::C), Grade::C);
        assert_eq!(Grade::B.capped_at(Grade::C), Grade::C);
        assert_eq!(Grade::C.capped_at(Grade::C), Grade::C);
        assert_eq!(Grade::D.capped_at(Grade::C), Grade::D);
        assert_eq!(Grade::E.capped_at(Grade::C), Grade::E);
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
        assert_eq!(" E ".parse::<Grade>().unwrap(), Grade::E);
        assert!("N".parse::<Grade>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase_grade() {
        let grade: Grade = serde_json::from_str(r#""d""#).unwrap();
        assert_eq!(grade, Grade::D);
        assert_eq!(serde_json::to_string(&grade).unwrap(), r#""D""#);
        assert!(serde_json::from_str::<Grade>(r#""Z""#).is_err());
    }
}
