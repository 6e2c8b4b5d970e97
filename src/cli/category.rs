//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::FlowType;
use crate::services::FinanceFacade;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category type (income or expense, or 0/1)
        #[arg(short = 't', long = "type")]
        flow: String,
    },
    /// List all categories
    List {
        /// Only show categories of this type
        #[arg(short = 't', long = "type")]
        flow: Option<String>,
    },
}

impl CategoryCommands {
    /// Whether running this command changes the ledger
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

fn parse_flow(s: &str) -> LedgerResult<FlowType> {
    FlowType::parse(s).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid category type: '{}'. Valid types: income, expense",
            s
        ))
    })
}

/// Handle a category command
pub fn handle_category_command(facade: &FinanceFacade<'_>, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::Create { name, flow } => {
            let category = facade.create_category(&name, parse_flow(&flow)?)?;
            println!(
                "Created category: '{}' (Type: {}, ID: {})",
                category.name, category.flow, category.id
            );
        }

        CategoryCommands::List { flow } => {
            let categories = match flow {
                Some(flow) => facade.list_categories_by_flow(parse_flow(&flow)?)?,
                None => facade.list_categories()?,
            };
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
