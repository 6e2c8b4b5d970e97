//! pocket-ledger - personal bookkeeping
//!
//! This library tracks bank accounts, income and expense categories and
//! dated operations, keeps account balances in step with posted operations,
//! reports income/expense totals, and moves the whole ledger in and out of
//! a JSON snapshot.
//!
//! # Architecture
//!
//! - `models`: accounts, categories, operations, money and identifiers
//! - `storage`: generic keyed repositories and JSON file helpers
//! - `services`: entity factory, finance facade, analytics
//! - `export`: the JSON snapshot codec
//! - `config`: paths and user settings
//! - `display`, `cli`: text output and command handlers for the binary
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use pocket_ledger::models::{FlowType, Money};
//! use pocket_ledger::services::FinanceFacade;
//! use pocket_ledger::storage::Storage;
//!
//! let storage = Storage::new();
//! let facade = FinanceFacade::new(&storage);
//!
//! let account = facade.create_account("Card", Money::from_units(1000)).unwrap();
//! let salary = facade.create_category("Salary", FlowType::Income).unwrap();
//! facade
//!     .add_income(account.id, salary.id, Money::from_units(500), Utc::now(), "Advance")
//!     .unwrap();
//!
//! let account = facade.get_account(account.id).unwrap().unwrap();
//! assert_eq!(account.balance, Money::from_units(1500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
