//! Ports (trait boundaries) for external collaborators.
//!
//! The training pipeline reports progress through these traits; adapters in
//! [`crate::pipeline::observers`] implement them.

pub mod observer;

pub use observer::{EpochSummary, Observer};
