//! Observer port - abstraction for training progress reporting
//!
//! Training only announces epoch boundaries; what happens with those
//! notices (progress bars, metrics, logs) is up to the observer.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Notice emitted after every completed epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochSummary {
    /// 1-based epoch number
    pub epoch: usize,
    /// Total epochs in the run
    pub epochs: usize,
    /// Gradient steps taken during the epoch
    pub updates: usize,
}

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(epochs, samples)` - once
/// 2. `on_epoch_end(summary)` - after every epoch
/// 3. `on_training_end()` - once
///
/// # Examples
///
/// ```no_run
/// use hexapawn::ports::{EpochSummary, Observer};
///
/// struct EpochCounter {
///     seen: usize,
/// }
///
/// impl Observer for EpochCounter {
///     fn on_epoch_end(&mut self, _summary: &EpochSummary) -> hexapawn::Result<()> {
///         self.seen += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before the first epoch.
    ///
    /// * `epochs` - number of epochs that will run
    /// * `samples` - size of the training set, terminal samples included
    fn on_training_start(&mut self, _epochs: usize, _samples: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every epoch.
    fn on_epoch_end(&mut self, _summary: &EpochSummary) -> Result<()> {
        Ok(())
    }

    /// Called once after the last epoch.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
