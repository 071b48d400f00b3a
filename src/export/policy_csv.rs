//! CSV export for the solved policy table and network predictions

use std::{io::Write, path::Path};

use serde::Serialize;

use crate::{Result, pipeline::EvaluationReport, solver::PolicyTable};

/// A single row in the policy CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyExportRecord {
    /// Comma-separated 10-value state
    pub state: String,
    /// 0 for White, 1 for Black
    pub player: u8,
    pub value: i8,
    pub utility: i8,
    pub next_utility: i8,
    /// Empty for terminal states
    pub action: Option<String>,
    pub next_state: Option<String>,
}

/// A single row in the prediction CSV export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionExportRecord {
    pub state: String,
    pub optimal: String,
    /// Rounded network output
    pub predicted: String,
    pub correct: bool,
}

/// Exporter for policy and prediction CSV files
pub struct PolicyCsvExporter;

impl PolicyCsvExporter {
    /// Rows in state discovery order
    pub fn records(table: &PolicyTable) -> Result<Vec<PolicyExportRecord>> {
        let mut records = Vec::with_capacity(table.len());
        for (state, entry) in table.iter() {
            let next_state = table.optimal_successor(state)?;
            records.push(PolicyExportRecord {
                state: state.encode(),
                player: state.to_move.index(),
                value: entry.value,
                utility: entry.utility,
                next_utility: entry.next_utility,
                action: entry.action.map(|action| action.to_string()),
                next_state: next_state.map(|next| next.encode()),
            });
        }
        Ok(records)
    }

    /// Write the policy table to `writer`, returning the number of rows.
    pub fn write<W: Write>(table: &PolicyTable, writer: W) -> Result<usize> {
        let mut csv = csv::Writer::from_writer(writer);
        let records = Self::records(table)?;
        for record in &records {
            csv.serialize(record)?;
        }
        csv.flush()?;
        Ok(records.len())
    }

    /// Export the policy table to a CSV file.
    pub fn export<P: AsRef<Path>>(table: &PolicyTable, path: P) -> Result<usize> {
        let file = std::fs::File::create(path)?;
        Self::write(table, file)
    }

    /// Export one row per scored state of an evaluation report.
    pub fn export_predictions<P: AsRef<Path>>(report: &EvaluationReport, path: P) -> Result<usize> {
        let mut csv = csv::Writer::from_path(path)?;
        for prediction in &report.predictions {
            let predicted = prediction
                .rounded()
                .iter()
                .map(|v| (*v as i8).to_string())
                .collect::<Vec<_>>()
                .join(",");
            csv.serialize(PredictionExportRecord {
                state: prediction.state.encode(),
                optimal: prediction.optimal.encode(),
                predicted,
                correct: prediction.correct,
            })?;
        }
        csv.flush()?;
        Ok(report.predictions.len())
    }
}
