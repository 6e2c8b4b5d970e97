//! Report formatting utilities for terminal output
//!
//! Provides the analytics summary and small text helpers shared by the
//! other display modules.

use crate::services::{AnalyticsReport, ExportSummary, ImportSummary};

const REPORT_WIDTH: usize = 32;

/// Format the income/expense summary
pub fn format_analytics_report(report: &AnalyticsReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Analytics", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total income:  {:>16}\n",
        report.total_income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Total expense: {:>16}\n",
        report.total_expense.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Difference:    {:>16}\n",
        report.difference().format_with_symbol(currency)
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("Operations: {}\n", report.operation_count));

    output
}

/// Confirmation message after an export
pub fn format_export_summary(summary: &ExportSummary) -> String {
    format!(
        "Data exported to file: {} ({} accounts, {} categories, {} operations)",
        summary.path.display(),
        summary.accounts,
        summary.categories,
        summary.operations
    )
}

/// Confirmation message after an import
pub fn format_import_summary(summary: &ImportSummary) -> String {
    format!(
        "Data imported: {} accounts, {} categories, {} operations",
        summary.accounts, summary.categories, summary.operations
    )
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::path::PathBuf;

    #[test]
    fn test_format_analytics_report() {
        let report = AnalyticsReport {
            total_income: Money::from_units(70000),
            total_expense: Money::from_units(4700),
            operation_count: 3,
        };

        let output = format_analytics_report(&report, "$");
        assert!(output.contains("Total income:"));
        assert!(output.contains("$70000.00"));
        assert!(output.contains("$4700.00"));
        assert!(output.contains("$65300.00"));
        assert!(output.contains("Operations: 3"));
    }

    #[test]
    fn test_negative_difference() {
        let report = AnalyticsReport {
            total_income: Money::zero(),
            total_expense: Money::from_units(5),
            operation_count: 1,
        };
        assert!(format_analytics_report(&report, "$").contains("-$5.00"));
    }

    #[test]
    fn test_format_export_summary() {
        let summary = ExportSummary {
            path: PathBuf::from("/tmp/export.json"),
            accounts: 2,
            categories: 3,
            operations: 4,
        };
        let line = format_export_summary(&summary);
        assert!(line.starts_with("Data exported to file: /tmp/export.json"));
        assert!(line.contains("4 operations"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Продукты и еда", 8), "Проду...");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("abc", 7), "  abc");
        assert_eq!(format_header("too long", 3), "too long");
    }
}
