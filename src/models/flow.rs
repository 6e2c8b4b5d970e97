//! Direction of money flow shared by categories and operations

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Whether a category or operation represents money coming in or going out
///
/// Serialized as text; ordinals `0` (Income) and `1` (Expense) are accepted
/// on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FlowType {
    Income,
    Expense,
}

impl FlowType {
    /// Parse flow type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "0" => Some(Self::Income),
            "expense" | "out" | "1" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn from_ordinal(n: u64) -> Option<Self> {
        match n {
            0 => Some(Self::Income),
            1 => Some(Self::Expense),
            _ => None,
        }
    }

    /// Sign used when listing operations
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl<'de> Deserialize<'de> for FlowType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlowVisitor;

        impl Visitor<'_> for FlowVisitor {
            type Value = FlowType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"Income\", \"Expense\", 0 or 1")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlowType, E> {
                FlowType::from_ordinal(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlowType, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(FlowType::from_ordinal)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FlowType, E> {
                match v.to_lowercase().as_str() {
                    "income" => Ok(FlowType::Income),
                    "expense" => Ok(FlowType::Expense),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(FlowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(FlowType::parse("income"), Some(FlowType::Income));
        assert_eq!(FlowType::parse("EXPENSE"), Some(FlowType::Expense));
        assert_eq!(FlowType::parse("transfer"), None);
    }

    #[test]
    fn test_serializes_as_text() {
        assert_eq!(serde_json::to_string(&FlowType::Expense).unwrap(), "\"Expense\"");
    }

    #[test]
    fn test_deserializes_text_and_ordinals() {
        let f: FlowType = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(f, FlowType::Income);
        let f: FlowType = serde_json::from_str("1").unwrap();
        assert_eq!(f, FlowType::Expense);
        assert!(serde_json::from_str::<FlowType>("2").is_err());
        assert!(serde_json::from_str::<FlowType>("\"Transfer\"").is_err());
    }
}
