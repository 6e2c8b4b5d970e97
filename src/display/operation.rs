//! Operation display formatting

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{FlowType, Money};
use crate::services::OperationDetail;

use super::report::truncate;

const MISSING: &str = "(deleted)";

/// Format operations as a register, one line per operation
///
/// Incomes are prefixed with `+`, expenses with `-`.
pub fn format_operation_list(details: &[OperationDetail], currency: &str, date_format: &str) -> String {
    if details.is_empty() {
        return "No operations found.".to_string();
    }

    let mut output = String::new();

    for detail in details {
        let op = &detail.operation;
        let amount = format!("{}{}", op.flow.sign(), op.amount.format_with_symbol(currency));

        output.push_str(&format!(
            "{:<16} | {:>14} | {:<15} | {:<20} | {}\n",
            format_date(&op.date, date_format),
            amount,
            truncate(detail.account_name.as_deref().unwrap_or(MISSING), 15),
            truncate(detail.category_name.as_deref().unwrap_or(MISSING), 20),
            op.description
        ));
    }

    output
}

/// Render `date` with a strftime pattern, falling back to RFC 3339 when
/// the pattern is not one chrono understands
fn format_date(date: &DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// One-line confirmation after posting an operation
pub fn format_posting(
    detail: &OperationDetail,
    new_balance: Option<Money>,
    currency: &str,
) -> String {
    let op = &detail.operation;
    let kind = match op.flow {
        FlowType::Income => "income",
        FlowType::Expense => "expense",
    };

    let mut line = format!(
        "Added {} '{}' of {}.",
        kind,
        op.description,
        op.amount.format_with_symbol(currency)
    );

    if let Some(balance) = new_balance {
        line.push_str(&format!(
            " New balance of '{}': {}",
            detail.account_name.as_deref().unwrap_or(MISSING),
            balance.format_with_symbol(currency)
        ));
    }

    line
}
