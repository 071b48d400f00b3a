//! Training and evaluation pipeline
//!
//! This module provides:
//! - Derivation of supervised samples from the policy table
//! - Epoch-by-epoch training driven by an explicit random source
//! - Scoring of network predictions against the optimal policy
//! - Observers that record progress during training

pub mod evaluation;
pub mod observers;
pub mod training;

pub use evaluation::{EvaluationReport, Prediction, evaluate, round_to_cell};
pub use observers::{JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{
    NUM_INPUTS, NUM_OUTPUTS, TrainingConfig, TrainingPipeline, TrainingResult, TrainingRun,
    TrainingSample, TrainingSet, build_training_set, train_epoch,
};

pub use crate::ports::Observer;
