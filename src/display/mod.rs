//! Display formatting for terminal output
//!
//! Turns models and service results into text. Nothing here touches
//! storage.

pub mod account;
pub mod category;
pub mod operation;
pub mod report;

pub use account::{format_account_details, format_account_list};
pub use category::format_category_list;
pub use operation::{format_operation_list, format_posting};
pub use report::{format_analytics_report, format_export_summary, format_import_summary};
