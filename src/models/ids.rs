//! Identifiers for accounts, categories and operations
//!
//! Each kind gets its own UUID newtype. Snapshots carry the bare UUID; the
//! command line shows and accepts a prefixed short form such as
//! `acc-1a2b3c4d`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! ledger_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random (v4) identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Prefix plus the first eight hex digits
            pub fn short(&self) -> String {
                self.to_string()
            }

            /// Case-insensitive comparison against the short form
            pub fn matches_short(&self, s: &str) -> bool {
                s.trim().eq_ignore_ascii_case(&self.short())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &hex[..8])
            }
        }

        /// Accepts a bare UUID or one carrying the kind's prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let bare = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(bare).map(Self)
            }
        }
    };
}

ledger_id!(AccountId, "acc-");
ledger_id!(CategoryId, "cat-");
ledger_id!(OperationId, "op-");

#[cfg(test)]
mod tests {
    use super::*;

    const GUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_new_ids_differ() {
        let a = AccountId::new();
        assert!(!a.as_uuid().is_nil());
        assert_ne!(a, AccountId::new());
    }

    #[test]
    fn test_short_form() {
        let id: AccountId = GUID.parse().unwrap();
        assert_eq!(id.short(), "acc-550e8400");

        let op: OperationId = GUID.parse().unwrap();
        assert_eq!(op.to_string(), "op-550e8400");
    }

    #[test]
    fn test_serializes_as_bare_guid() {
        let id: CategoryId = GUID.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", GUID));

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_parse_with_prefix() {
        let id: AccountId = format!("acc-{}", GUID).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), GUID);
        assert!("acc-nope".parse::<AccountId>().is_err());
        assert!(format!("cat-{}", GUID).parse::<AccountId>().is_err());
    }

    #[test]
    fn test_matches_short() {
        let id = AccountId::new();
        assert!(id.matches_short(&id.short().to_uppercase()));
        assert!(!AccountId::new().matches_short(&id.short()));
    }
}
