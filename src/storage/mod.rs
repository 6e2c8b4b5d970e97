//! Storage layer for pocket-ledger
//!
//! Holds one in-memory repository per entity kind, plus JSON file helpers
//! used by snapshot export and import.

pub mod file_io;
pub mod repository;

pub use file_io::{read_text_required, write_json_atomic};
pub use repository::{Entity, InMemoryRepository, Repository};

use crate::models::{Account, Category, Operation};

/// Main storage coordinator that provides access to all repositories
#[derive(Default)]
pub struct Storage {
    pub accounts: InMemoryRepository<Account>,
    pub categories: InMemoryRepository<Category>,
    pub operations: InMemoryRepository<Operation>,
}

impl Storage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> crate::error::LedgerResult<bool> {
        Ok(self.accounts.count()? == 0
            && self.categories.count()? == 0
            && self.operations.count()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_storage_creation() {
        let storage = Storage::new();
        assert!(storage.is_empty().unwrap());

        storage
            .accounts
            .add(Account::new("Cash", Money::zero()))
            .unwrap();
        assert!(!storage.is_empty().unwrap());
    }
}
