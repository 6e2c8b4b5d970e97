//! Operation model
//!
//! A single dated posting of income or expense against one account and one
//! category. Operations are immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::flow::FlowType;
use super::ids::{AccountId, CategoryId, OperationId};
use super::money::Money;

/// A posted income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// Income or Expense
    #[serde(rename = "Type")]
    pub flow: FlowType,

    /// The account whose balance this operation moved
    #[serde(rename = "BankAccountId")]
    pub account_id: AccountId,

    /// The category classifying this operation
    pub category_id: CategoryId,

    /// Strictly positive amount
    pub amount: Money,

    /// When the operation happened
    #[serde(with = "iso_datetime")]
    pub date: DateTime<Utc>,

    /// Free-text description
    pub description: String,
}

impl Operation {
    /// Create a new operation with a fresh identifier
    pub fn new(
        flow: FlowType,
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: OperationId::new(),
            flow,
            account_id,
            category_id,
            amount,
            date,
            description: description.into(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}",
            self.date.format("%Y-%m-%d"),
            self.flow.sign(),
            self.amount,
            self.description
        )
    }
}

/// Serde helpers for operation timestamps
///
/// Writes RFC 3339. Reads RFC 3339, or a timestamp without offset which is
/// taken as UTC.
pub(crate) mod iso_datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 date: {}", s)))
    }

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
