//! Observer implementations for the training pipeline
//!
//! Observers collect progress data during training without coupling the
//! training loop to a particular output format.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{EpochSummary, Observer},
};

/// Progress bar observer - Shows epochs completed
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    updates: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            updates: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, epochs: usize, _samples: usize) -> Result<()> {
        let pb = ProgressBar::new(epochs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} epochs ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        self.updates = 0;
        Ok(())
    }

    fn on_epoch_end(&mut self, summary: &EpochSummary) -> Result<()> {
        self.updates += summary.updates;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.epoch as u64);
            pb.set_message(format!("{} updates", self.updates));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} updates", self.updates));
        }
        Ok(())
    }
}

/// Metrics observer - Records every epoch summary
#[derive(Debug, Default)]
pub struct MetricsObserver {
    planned_epochs: usize,
    samples: usize,
    epochs: Vec<EpochSummary>,
    finished: bool,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epochs_completed(&self) -> usize {
        self.epochs.len()
    }

    pub fn total_updates(&self) -> usize {
        self.epochs.iter().map(|e| e.updates).sum()
    }

    /// Epoch summaries in the order they were reported
    pub fn epochs(&self) -> &[EpochSummary] {
        &self.epochs
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            planned_epochs: self.planned_epochs,
            epochs_completed: self.epochs_completed(),
            samples: self.samples,
            total_updates: self.total_updates(),
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub planned_epochs: usize,
    pub epochs_completed: usize,
    pub samples: usize,
    pub total_updates: usize,
}

impl Observer for MetricsObserver {
    fn on_training_start(&mut self, epochs: usize, samples: usize) -> Result<()> {
        self.planned_epochs = epochs;
        self.samples = samples;
        self.epochs.clear();
        self.finished = false;
        Ok(())
    }

    fn on_epoch_end(&mut self, summary: &EpochSummary) -> Result<()> {
        self.epochs.push(*summary);
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// JSONL observer - Writes one epoch summary per line
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_epoch_end(&mut self, summary: &EpochSummary) -> Result<()> {
        serde_json::to_writer(&mut self.writer, summary)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
