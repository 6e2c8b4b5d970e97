//! Operation CLI commands
//!
//! Posting incomes and expenses, and listing the operation register.

use chrono::Utc;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_operation_list, format_posting};
use crate::error::{LedgerError, LedgerResult};
use crate::models::operation::iso_datetime;
use crate::models::{FlowType, Money};
use crate::services::{FinanceFacade, OperationDetail, OperationInput};

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Account name or ID
    pub account: String,
    /// Category name or ID
    pub category: String,
    /// Amount (e.g., "35.50")
    pub amount: String,
    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Operation date (YYYY-MM-DD or RFC 3339); defaults to now
    #[arg(long)]
    pub date: Option<String>,
}

/// Operation subcommands
#[derive(Subcommand, Debug)]
pub enum OperationCommands {
    /// List all operations, newest first
    List {
        /// Number of operations to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle `income` / `expense`
pub fn handle_post_command(
    facade: &FinanceFacade<'_>,
    settings: &Settings,
    flow: FlowType,
    args: PostArgs,
) -> LedgerResult<()> {
    let account = facade
        .find_account(&args.account)?
        .ok_or_else(|| LedgerError::account_not_found(&args.account))?;
    let category = facade
        .find_category(&args.category)?
        .ok_or_else(|| LedgerError::category_not_found(&args.category))?;

    let amount = Money::parse(&args.amount).map_err(|e| {
        LedgerError::Validation(format!("Invalid amount '{}': {}", args.amount, e))
    })?;

    let date = match args.date.as_deref() {
        Some(raw) => iso_datetime::parse(raw)
            .ok_or_else(|| LedgerError::Validation(format!("Invalid date: '{}'", raw)))?,
        None => Utc::now(),
    };

    let operation = facade.post(OperationInput {
        account_id: account.id,
        category_id: category.id,
        flow,
        amount,
        date,
        description: args.description,
    })?;

    let updated = facade.get_account(operation.account_id)?;
    let detail = OperationDetail {
        operation,
        account_name: updated.as_ref().map(|a| a.name.clone()),
        category_name: Some(category.name),
    };

    println!(
        "{}",
        format_posting(
            &detail,
            updated.map(|a| a.balance),
            &settings.currency_symbol
        )
    );

    Ok(())
}

/// Handle an operation command
pub fn handle_operation_command(
    facade: &FinanceFacade<'_>,
    settings: &Settings,
    cmd: OperationCommands,
) -> LedgerResult<()> {
    match cmd {
        OperationCommands::List { limit } => {
            let mut details = facade.operation_details()?;
            if let Some(limit) = limit {
                details.truncate(limit);
            }
            print!(
                "{}",
                format_operation_list(&details, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
