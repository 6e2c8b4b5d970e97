//! Entity factory
//!
//! Validates inputs and builds new accounts, categories and operations.
//! Building an operation also applies its effect to the account balance.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Category, CategoryId, FlowType, Money, Operation};
use crate::storage::{Repository, Storage};

/// Validating constructor for domain entities
pub struct EntityFactory<'a> {
    storage: &'a Storage,
}

/// Input for posting a new operation
#[derive(Debug, Clone)]
pub struct OperationInput {
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub flow: FlowType,
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// A freshly built operation together with the account state it replaced
#[derive(Debug, Clone)]
pub struct Posting {
    pub operation: Operation,
    /// The account as it was before the balance change
    pub previous: Account,
}

impl<'a> EntityFactory<'a> {
    /// Create a new factory over the given storage
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Build a new account
    pub fn create_account(&self, name: &str, initial_balance: Money) -> LedgerResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if initial_balance.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Initial balance cannot be negative: {}",
                initial_balance
            )));
        }

        Ok(Account::new(name, initial_balance))
    }

    /// Build a new category
    pub fn create_category(&self, name: &str, flow: FlowType) -> LedgerResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        Ok(Category::new(name, flow))
    }

    /// Build a new operation and apply it to its account
    ///
    /// Checks run in this order: amount, account, category, type match,
    /// funds. Any failure leaves the account untouched. On success the
    /// account has already been written back with its new balance.
    pub fn create_operation(&self, input: OperationInput) -> LedgerResult<Posting> {
        if !input.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Operation amount must be positive, got {}",
                input.amount
            )));
        }

        let previous = self
            .storage
            .accounts
            .get(input.account_id)?
            .ok_or_else(|| LedgerError::account_not_found(input.account_id.to_string()))?;

        let category = self
            .storage
            .categories
            .get(input.category_id)?
            .ok_or_else(|| LedgerError::category_not_found(input.category_id.to_string()))?;

        if category.flow != input.flow {
            return Err(LedgerError::Conflict(format!(
                "Operation type {} does not match category '{}' of type {}",
                input.flow, category.name, category.flow
            )));
        }

        let new_balance = match input.flow {
            FlowType::Expense => {
                if previous.balance < input.amount {
                    warn!(
                        "Rejected expense of {} on {}: balance {}",
                        input.amount, previous.id, previous.balance
                    );
                    return Err(LedgerError::InsufficientFunds {
                        account: previous.name,
                        needed: input.amount,
                        available: previous.balance,
                    });
                }
                previous.balance.checked_sub(input.amount)
            }
            FlowType::Income => previous.balance.checked_add(input.amount),
        }
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "Posting {} to '{}' would take its balance out of range",
                input.amount, previous.name
            ))
        })?;

        let mut account = previous.clone();
        account.balance = new_balance;

        let operation = Operation::new(
            input.flow,
            input.account_id,
            input.category_id,
            input.amount,
            input.date,
            input.description,
        );

        if !self.storage.accounts.update(account.clone())? {
            // Deleted between lookup and write back
            return Err(LedgerError::account_not_found(input.account_id.to_string()));
        }

        info!(
            "Posted {} {} to {}: balance {} -> {}",
            operation.flow, operation.amount, account.id, previous.balance, account.balance
        );

        Ok(Posting {
            operation,
            previous,
        })
    }
}
