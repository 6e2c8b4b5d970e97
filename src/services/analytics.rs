//! Aggregate income/expense report

use crate::error::{LedgerError, LedgerResult};
use crate::models::{FlowType, Money, Operation};

/// Totals over the whole operation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticsReport {
    pub total_income: Money,
    pub total_expense: Money,
    pub operation_count: usize,
}

impl AnalyticsReport {
    /// Sum incomes and expenses across all operations
    ///
    /// Fails with `Validation` if either total leaves the representable range.
    pub fn from_operations<'a>(
        operations: impl IntoIterator<Item = &'a Operation>,
    ) -> LedgerResult<Self> {
        let mut report = Self::default();

        for op in operations {
            let total = match op.flow {
                FlowType::Income => &mut report.total_income,
                FlowType::Expense => &mut report.total_expense,
            };
            *total = total.checked_add(op.amount).ok_or_else(|| {
                LedgerError::Validation(format!("{} total is out of range", op.flow))
            })?;
            report.operation_count += 1;
        }

        Ok(report)
    }

    /// Total income minus total expense
    pub fn difference(&self) -> Money {
        Money::from_cents(
            self.total_income
                .cents()
                .saturating_sub(self.total_expense.cents()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, CategoryId};
    use chrono::Utc;

    fn op(flow: FlowType, units: i64) -> Operation {
        Operation::new(
            flow,
            AccountId::new(),
            CategoryId::new(),
            Money::from_units(units),
            Utc::now(),
            "",
        )
    }

    #[test]
    fn test_empty_report() {
        let report = AnalyticsReport::from_operations(&Vec::<Operation>::new()).unwrap();
        assert!(report.total_income.is_zero());
        assert!(report.total_expense.is_zero());
        assert!(report.difference().is_zero());
    }

    #[test]
    fn test_totals() {
        let ops = vec![
            op(FlowType::Income, 70000),
            op(FlowType::Expense, 3500),
            op(FlowType::Expense, 1200),
        ];
        let report = AnalyticsReport::from_operations(&ops).unwrap();
        assert_eq!(report.total_income, Money::from_units(70000));
        assert_eq!(report.total_expense, Money::from_units(4700));
        assert_eq!(report.difference(), Money::from_units(65300));
        assert_eq!(report.operation_count, 3);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let huge = Money::from_cents(i64::MAX - 10);
        let income = || {
            Operation::new(
                FlowType::Income,
                AccountId::new(),
                CategoryId::new(),
                huge,
                Utc::now(),
                "",
            )
        };
        let ops = vec![income(), income()];

        let err = AnalyticsReport::from_operations(&ops).unwrap_err();
        assert!(err.is_validation());
    }
}
