//! Demonstration data
//!
//! A small ready-made ledger: two accounts, three categories and three
//! operations spread over the last ten days.

use chrono::{Duration, Utc};

use crate::error::LedgerResult;
use crate::models::{FlowType, Money};

use super::facade::FinanceFacade;

/// Populate the ledger with demonstration data through the facade
pub fn load_demo_data(facade: &FinanceFacade<'_>) -> LedgerResult<()> {
    let now = Utc::now();

    let card = facade.create_account("Main Card", Money::from_units(50_000))?;
    let cash = facade.create_account("Cash", Money::from_units(15_000))?;

    let salary = facade.create_category("Salary", FlowType::Income)?;
    let cafe = facade.create_category("Cafes and Restaurants", FlowType::Expense)?;
    let groceries = facade.create_category("Groceries", FlowType::Expense)?;

    facade.add_income(
        card.id,
        salary.id,
        Money::from_units(70_000),
        now - Duration::days(10),
        "Advance",
    )?;
    facade.add_expense(
        card.id,
        groceries.id,
        Money::from_units(3_500),
        now - Duration::days(5),
        "Weekly shopping",
    )?;
    facade.add_expense(
        cash.id,
        cafe.id,
        Money::from_units(1_200),
        now - Duration::days(2),
        "Dinner out",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn test_demo_balances() {
        let storage = Storage::new();
        let facade = FinanceFacade::new(&storage);

        load_demo_data(&facade).unwrap();

        let card = facade.find_account("Main Card").unwrap().unwrap();
        let cash = facade.find_account("Cash").unwrap().unwrap();
        assert_eq!(card.balance, Money::from_units(116_500));
        assert_eq!(cash.balance, Money::from_units(13_800));
        assert_eq!(facade.list_categories().unwrap().len(), 3);
        assert_eq!(facade.list_operations().unwrap().len(), 3);
    }
}
