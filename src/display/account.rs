//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account], currency: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}\n",
        "ID",
        "Name",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>14}\n",
            account.id.short(),
            account.name,
            account.balance.format_with_symbol(currency),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}\n",
        "",
        "TOTAL",
        total.format_with_symbol(currency),
        name_width = name_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:      {}\n", account.id.as_uuid()));
    output.push_str(&format!(
        "  Balance: {}\n",
        account.balance.format_with_symbol(currency)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            Account::new("Checking", Money::from_cents(100000)),
            Account::new("Savings", Money::from_cents(500000)),
        ];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("Checking"));
        assert!(output.contains("Savings"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$6000.00"));
        assert!(output.contains(&accounts[0].id.short()));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_account_list(&[], "$");
        assert!(output.contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let account = Account::new("My Account", Money::from_units(12));
        let output = format_account_details(&account, "€");

        assert!(output.contains("My Account"));
        assert!(output.contains("€12.00"));
        assert!(output.contains(&account.id.as_uuid().to_string()));
    }
}
