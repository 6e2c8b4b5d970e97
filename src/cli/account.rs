//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_account_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::FinanceFacade;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Initial balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

impl AccountCommands {
    /// Whether running this command changes the ledger
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

/// Handle an account command
pub fn handle_account_command(
    facade: &FinanceFacade<'_>,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create { name, balance } => {
            let initial = Money::parse(&balance).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '1000.00' or '1000'. Error: {}",
                    balance, e
                ))
            })?;

            let account = facade.create_account(&name, initial)?;

            println!(
                "Created account: '{}' (ID: {}) with balance {}",
                account.name,
                account.id,
                account.balance.format_with_symbol(currency)
            );
        }

        AccountCommands::List => {
            let accounts = facade.list_accounts()?;
            print!("{}", format_account_list(&accounts, currency));
        }

        AccountCommands::Show { account } => {
            let found = facade
                .find_account(&account)?
                .ok_or_else(|| LedgerError::account_not_found(&account))?;
            print!("{}", format_account_details(&found, currency));
        }
    }

    Ok(())
}
