//! Core data models for pocket-ledger
//!
//! This module contains the data structures of the bookkeeping domain:
//! accounts, categories, operations, money amounts and identifiers.

pub mod account;
pub mod category;
pub mod flow;
pub mod ids;
pub mod money;
pub mod operation;

pub use account::Account;
pub use category::Category;
pub use flow::FlowType;
pub use ids::{AccountId, CategoryId, OperationId};
pub use money::Money;
pub use operation::Operation;
