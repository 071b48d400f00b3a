//! Export functionality for analysis
//!
//! Writes the solved policy table and network predictions to CSV.

mod policy_csv;

pub use policy_csv::{PolicyCsvExporter, PolicyExportRecord, PredictionExportRecord};
