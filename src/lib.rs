//! Hexapawn solver and policy network
//!
//! This crate provides:
//! - Rules for 3×3 Hexapawn with validated state transitions
//! - State-space enumeration and full-depth minimax over every reachable state
//! - A feed-forward neural network with hand-written backpropagation
//! - A training pipeline that fits the network to the solver's optimal moves
//! - CSV export and a command-line interface

pub mod cli;
pub mod error;
pub mod export;
pub mod hexapawn;
pub mod nn;
pub mod pipeline;
pub mod ports;
pub mod solver;

pub use error::{Error, Result};
pub use hexapawn::{Action, ActionKind, Player, State, StateSpace, enumerate_states};
pub use nn::{Activation, ForwardTrace, Network, NetworkConfig};
pub use pipeline::{EvaluationReport, TrainingConfig, TrainingPipeline, TrainingSet};
pub use solver::{PolicyEntry, PolicyTable, build_policy_table, minimax};
