//! JSON snapshot codec
//!
//! A snapshot is the complete state of the ledger: every account, category
//! and operation. Field names are matched case-insensitively on read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Category, Operation};
use crate::storage::{Repository, Storage};

/// Every field name a snapshot may contain, in its canonical spelling
const CANONICAL_KEYS: &[&str] = &[
    "Accounts",
    "Categories",
    "Operations",
    "Id",
    "Name",
    "Balance",
    "Type",
    "BankAccountId",
    "CategoryId",
    "Amount",
    "Date",
    "Description",
];

/// Full ledger state as written to and read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub operations: Vec<Operation>,
}

impl Snapshot {
    /// Capture the current contents of storage
    ///
    /// Entities are ordered by name (accounts, categories) and by date
    /// (operations) so that exports are stable.
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let mut accounts = storage.accounts.get_all()?;
        accounts.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.as_uuid().cmp(b.id.as_uuid())));

        let mut categories = storage.categories.get_all()?;
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.as_uuid().cmp(b.id.as_uuid())));

        let mut operations = storage.operations.get_all()?;
        operations.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.as_uuid().cmp(b.id.as_uuid())));

        Ok(Self {
            accounts,
            categories,
            operations,
        })
    }

    /// Parse a snapshot document
    ///
    /// Fails with `Format` on malformed JSON, missing keys, wrong value
    /// types, or content rejected by [`Snapshot::validate`].
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| LedgerError::Format(format!("Invalid JSON: {}", e)))?;

        let snapshot: Snapshot = serde_json::from_value(normalize_keys(value))
            .map_err(|e| LedgerError::Format(format!("Unexpected snapshot shape: {}", e)))?;

        snapshot.validate().map_err(LedgerError::Format)?;

        Ok(snapshot)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> LedgerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LedgerError::Io(e.to_string()))
    }

    /// Check the entity-level rules that creation would have enforced
    pub fn validate(&self) -> Result<(), String> {
        for account in &self.accounts {
            account
                .validate()
                .map_err(|e| format!("Account {}: {}", account.id, e))?;
        }

        for category in &self.categories {
            category
                .validate()
                .map_err(|e| format!("Category {}: {}", category.id, e))?;
        }

        for op in &self.operations {
            if !op.amount.is_positive() {
                return Err(format!(
                    "Operation {}: amount must be positive, got {}",
                    op.id, op.amount
                ));
            }
        }

        Ok(())
    }

    pub fn entity_count(&self) -> usize {
        self.accounts.len() + self.categories.len() + self.operations.len()
    }
}

/// Rewrite object keys to their canonical spelling, recursively
///
/// Keys that match no known field are left untouched.
fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let normalized: Map<String, Value> = map
                .into_iter()
                .map(|(key, v)| {
                    let key = CANONICAL_KEYS
                        .iter()
                        .find(|canon| canon.eq_ignore_ascii_case(&key))
                        .map(|canon| canon.to_string())
                        .unwrap_or(key);
                    (key, normalize_keys(v))
                })
                .collect();
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowType, Money};
    use chrono::{TimeZone, Utc};

    fn sample_snapshot() -> Snapshot {
        let account = Account::new("Card", Money::from_cents(150050));
        let category = Category::new("Salary", FlowType::Income);
        let operation = Operation::new(
            FlowType::Income,
            account.id,
            category.id,
            Money::from_units(500),
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
            "Advance",
        );
        Snapshot {
            accounts: vec![account],
            categories: vec![category],
            operations: vec![operation],
        }
    }

    #[test]
    fn test_top_level_keys() {
        let json = sample_snapshot().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"Accounts".to_string()));
        assert!(keys.contains(&"Categories".to_string()));
        assert!(keys.contains(&"Operations".to_string()));
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = sample_snapshot();
        let json = snapshot.to_json().unwrap();
        let parsed = Snapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_field_names_are_case_insensitive() {
        let json = r#"{
            "accounts": [{"id": "550e8400-e29b-41d4-a716-446655440000", "NAME": "Cash", "balance": 15000}],
            "CATEGORIES": [{"Id": "650e8400-e29b-41d4-a716-446655440000", "name": "Cafe", "type": 1}],
            "operations": [{
                "id": "750e8400-e29b-41d4-a716-446655440000",
                "type": "expense",
                "bankaccountid": "550e8400-e29b-41d4-a716-446655440000",
                "categoryID": "650e8400-e29b-41d4-a716-446655440000",
                "amount": 1200,
                "date": "2025-02-01T19:00:00",
                "description": "Dinner"
            }]
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.accounts[0].name, "Cash");
        assert_eq!(snapshot.accounts[0].balance, Money::from_units(15000));
        assert_eq!(snapshot.categories[0].flow, FlowType::Expense);
        assert_eq!(snapshot.operations[0].amount, Money::from_units(1200));
        assert_eq!(snapshot.operations[0].account_id, snapshot.accounts[0].id);
    }

    #[test]
    fn test_missing_operations_key_rejected() {
        let json = r#"{"Accounts": [], "Categories": []}"#;
        let err = Snapshot::from_json(json).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_missing_entity_field_rejected() {
        let json = r#"{"Accounts": [{"Id": "550e8400-e29b-41d4-a716-446655440000", "Name": "Cash"}],
                       "Categories": [], "Operations": []}"#;
        assert!(Snapshot::from_json(json).unwrap_err().is_format());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Snapshot::from_json("{\"Accounts\": [").unwrap_err().is_format());
        assert!(Snapshot::from_json("[]").unwrap_err().is_format());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut snapshot = sample_snapshot();
        snapshot.operations[0].amount = Money::zero();
        let json = snapshot.to_json().unwrap();
        assert!(Snapshot::from_json(&json).unwrap_err().is_format());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"Accounts": [], "Categories": [], "Operations": [], "ExportedBy": "someone"}"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.entity_count(), 0);
    }
}
