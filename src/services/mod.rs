//! Service layer for pocket-ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and construction in the factory, orchestration in the facade.

pub mod analytics;
pub mod demo;
pub mod facade;
pub mod factory;

pub use analytics::AnalyticsReport;
pub use demo::load_demo_data;
pub use facade::{
    ExportSummary, FinanceFacade, ImportSummary, OperationDetail, DEFAULT_EXPORT_FILE,
};
pub use factory::{EntityFactory, OperationInput, Posting};
