//! Export module for pocket-ledger
//!
//! Provides the JSON snapshot used for full export and import.

pub mod json;

pub use json::Snapshot;
