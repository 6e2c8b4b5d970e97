//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the finance facade.

pub mod account;
pub mod category;
pub mod data;
pub mod operation;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_export_command, handle_import_command};
pub use operation::{handle_operation_command, handle_post_command, OperationCommands, PostArgs};
