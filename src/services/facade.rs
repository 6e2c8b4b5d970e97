//! Finance facade
//!
//! The single entry point for callers: creates entities through the
//! factory, persists them in the repositories, answers queries and moves
//! the whole ledger in and out of JSON snapshots.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::export::Snapshot;
use crate::models::{
    Account, AccountId, Category, CategoryId, FlowType, Money, Operation,
};
use crate::storage::file_io::{read_text_required, write_json_atomic};
use crate::storage::{Repository, Storage};

use super::analytics::AnalyticsReport;
use super::factory::{EntityFactory, OperationInput, Posting};

/// File name used by [`FinanceFacade::export_to_json`], relative to the
/// working directory
pub const DEFAULT_EXPORT_FILE: &str = "export.json";

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Absolute path of the written file
    pub path: PathBuf,
    pub accounts: usize,
    pub categories: usize,
    pub operations: usize,
}

/// Result of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub accounts: usize,
    pub categories: usize,
    pub operations: usize,
}

/// An operation with the names of what it references
///
/// Names are `None` when the referenced entity no longer exists.
#[derive(Debug, Clone)]
pub struct OperationDetail {
    pub operation: Operation,
    pub account_name: Option<String>,
    pub category_name: Option<String>,
}

/// Orchestrates the factory and repositories
pub struct FinanceFacade<'a> {
    storage: &'a Storage,
    factory: EntityFactory<'a>,
}

impl<'a> FinanceFacade<'a> {
    /// Create a new facade over the given storage
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: EntityFactory::new(storage),
        }
    }

    /// Create and store a new account
    pub fn create_account(&self, name: &str, initial_balance: Money) -> LedgerResult<Account> {
        let account = self.factory.create_account(name, initial_balance)?;
        self.storage.accounts.add(account.clone())?;

        info!("Created account {} '{}' with {}", account.id, account.name, account.balance);
        Ok(account)
    }

    /// Create and store a new category
    pub fn create_category(&self, name: &str, flow: FlowType) -> LedgerResult<Category> {
        let category = self.factory.create_category(name, flow)?;
        self.storage.categories.add(category.clone())?;

        info!("Created {} category {} '{}'", category.flow, category.id, category.name);
        Ok(category)
    }

    /// Post an income to an account
    pub fn add_income(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: DateTime<Utc>,
        description: &str,
    ) -> LedgerResult<Operation> {
        self.post(OperationInput {
            account_id,
            category_id,
            flow: FlowType::Income,
            amount,
            date,
            description: description.to_string(),
        })
    }

    /// Post an expense to an account
    pub fn add_expense(
        &self,
        account_id: AccountId,
        category_id: CategoryId,
        amount: Money,
        date: DateTime<Utc>,
        description: &str,
    ) -> LedgerResult<Operation> {
        self.post(OperationInput {
            account_id,
            category_id,
            flow: FlowType::Expense,
            amount,
            date,
            description: description.to_string(),
        })
    }

    /// Post an operation of either type
    ///
    /// The balance change and the recorded operation go together: if the
    /// operation cannot be stored, the account is put back as it was.
    pub fn post(&self, input: OperationInput) -> LedgerResult<Operation> {
        let posting = self.factory.create_operation(input)?;
        self.record(posting)
    }

    /// Store the operation of an applied posting, or undo its balance change
    fn record(&self, posting: Posting) -> LedgerResult<Operation> {
        match self.storage.operations.add(posting.operation.clone()) {
            Ok(true) => Ok(posting.operation),
            Ok(false) => {
                self.restore_account(posting.previous)?;
                Err(LedgerError::Storage(format!(
                    "Operation {} already recorded",
                    posting.operation.id
                )))
            }
            Err(e) => {
                self.restore_account(posting.previous)?;
                Err(e)
            }
        }
    }

    fn restore_account(&self, previous: Account) -> LedgerResult<()> {
        warn!(
            "Rolling back balance of {} to {}",
            previous.id, previous.balance
        );
        self.storage.accounts.update(previous)?;
        Ok(())
    }

    /// All accounts, sorted by name
    pub fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        let mut accounts = self.storage.accounts.get_all()?;
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(accounts)
    }

    /// All categories, incomes first, then by name
    pub fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        let mut categories = self.storage.categories.get_all()?;
        categories.sort_by(|a, b| {
            a.flow
                .cmp(&b.flow)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(categories)
    }

    /// Categories usable for an operation of the given type
    pub fn list_categories_by_flow(&self, flow: FlowType) -> LedgerResult<Vec<Category>> {
        Ok(self
            .list_categories()?
            .into_iter()
            .filter(|c| c.flow == flow)
            .collect())
    }

    /// All operations, newest first
    pub fn list_operations(&self) -> LedgerResult<Vec<Operation>> {
        let mut operations = self.storage.operations.get_all()?;
        operations.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(operations)
    }

    /// All operations, newest first, with resolved account and category names
    pub fn operation_details(&self) -> LedgerResult<Vec<OperationDetail>> {
        self.list_operations()?
            .into_iter()
            .map(|operation| {
                let account_name = self
                    .storage
                    .accounts
                    .get(operation.account_id)?
                    .map(|a| a.name);
                let category_name = self
                    .storage
                    .categories
                    .get(operation.category_id)?
                    .map(|c| c.name);
                Ok(OperationDetail {
                    operation,
                    account_name,
                    category_name,
                })
            })
            .collect()
    }

    /// Get an account by ID
    pub fn get_account(&self, id: AccountId) -> LedgerResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Get a category by ID
    pub fn get_category(&self, id: CategoryId) -> LedgerResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find an account by full ID, short ID or name (case-insensitive)
    pub fn find_account(&self, identifier: &str) -> LedgerResult<Option<Account>> {
        if let Ok(id) = identifier.parse::<AccountId>() {
            if let Some(account) = self.get_account(id)? {
                return Ok(Some(account));
            }
        }

        let needle = identifier.trim().to_lowercase();
        Ok(self
            .storage
            .accounts
            .get_all()?
            .into_iter()
            .find(|a| a.id.matches_short(identifier) || a.name.to_lowercase() == needle))
    }

    /// Find a category by full ID, short ID or name (case-insensitive)
    pub fn find_category(&self, identifier: &str) -> LedgerResult<Option<Category>> {
        if let Ok(id) = identifier.parse::<CategoryId>() {
            if let Some(category) = self.get_category(id)? {
                return Ok(Some(category));
            }
        }

        let needle = identifier.trim().to_lowercase();
        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .find(|c| c.id.matches_short(identifier) || c.name.to_lowercase() == needle))
    }

    /// Income and expense totals over every operation
    pub fn analytics_report(&self) -> LedgerResult<AnalyticsReport> {
        let operations = self.storage.operations.get_all()?;
        AnalyticsReport::from_operations(&operations)
    }

    /// Export the full state to [`DEFAULT_EXPORT_FILE`] in the working directory
    pub fn export_to_json(&self) -> LedgerResult<ExportSummary> {
        self.export_to(DEFAULT_EXPORT_FILE)
    }

    /// Export the full state to the given path
    pub fn export_to(&self, path: impl AsRef<Path>) -> LedgerResult<ExportSummary> {
        let path = path.as_ref();
        let snapshot = Snapshot::from_storage(self.storage)?;

        write_json_atomic(path, &snapshot)?;

        let path = path.canonicalize().map_err(|e| {
            LedgerError::Io(format!("Failed to resolve {}: {}", path.display(), e))
        })?;

        info!(
            "Exported {} entities to {}",
            snapshot.entity_count(),
            path.display()
        );

        Ok(ExportSummary {
            path,
            accounts: snapshot.accounts.len(),
            categories: snapshot.categories.len(),
            operations: snapshot.operations.len(),
        })
    }

    /// Replace the full state with the contents of a snapshot file
    ///
    /// The file is read, parsed and validated before anything is deleted,
    /// so a bad file leaves the current state as it was. After that every
    /// account, category and operation is deleted, then the snapshot's
    /// accounts, categories and operations are inserted in that order.
    pub fn import_from_json(&self, path: impl AsRef<Path>) -> LedgerResult<ImportSummary> {
        let path = path.as_ref();
        let contents = read_text_required(path)?;
        let snapshot = Snapshot::from_json(&contents).map_err(|e| {
            error!("Rejected import from {}: {}", path.display(), e);
            e
        })?;

        self.clear_all()?;

        let summary = ImportSummary {
            accounts: snapshot.accounts.len(),
            categories: snapshot.categories.len(),
            operations: snapshot.operations.len(),
        };

        for account in snapshot.accounts {
            self.storage.accounts.add(account)?;
        }
        for category in snapshot.categories {
            self.storage.categories.add(category)?;
        }
        for operation in snapshot.operations {
            self.storage.operations.add(operation)?;
        }

        info!(
            "Imported {} accounts, {} categories, {} operations from {}",
            summary.accounts,
            summary.categories,
            summary.operations,
            path.display()
        );

        Ok(summary)
    }

    fn clear_all(&self) -> LedgerResult<()> {
        for account in self.storage.accounts.get_all()? {
            self.storage.accounts.delete(account.id)?;
        }
        for category in self.storage.categories.get_all()? {
            self.storage.categories.delete(category.id)?;
        }
        for operation in self.storage.operations.get_all()? {
            self.storage.operations.delete(operation.id)?;
        }
        Ok(())
    }
}
