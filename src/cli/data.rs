//! CLI commands for snapshot export and import

use std::path::PathBuf;

use crate::display::{format_export_summary, format_import_summary};
use crate::error::LedgerResult;
use crate::services::FinanceFacade;

/// Handle `export`
///
/// Without an explicit output path the facade's default export file in
/// the working directory is used.
pub fn handle_export_command(facade: &FinanceFacade<'_>, output: Option<PathBuf>) -> LedgerResult<()> {
    let summary = match output {
        Some(path) => facade.export_to(path)?,
        None => facade.export_to_json()?,
    };

    println!("{}", format_export_summary(&summary));
    Ok(())
}

/// Handle `import`
pub fn handle_import_command(facade: &FinanceFacade<'_>, path: PathBuf) -> LedgerResult<()> {
    let summary = facade.import_from_json(&path)?;

    println!("{}", format_import_summary(&summary));
    Ok(())
}
