//! Supervised training on the solver's optimal policy

use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    hexapawn::{CELL_COUNT, State},
    nn::{Network, NetworkConfig},
    ports::{EpochSummary, Observer},
    solver::{PolicyTable, build_policy_table},
};

/// Network input width: the board without the mover bit
pub const NUM_INPUTS: usize = CELL_COUNT;
/// Network output width: the board after the optimal move
pub const NUM_OUTPUTS: usize = CELL_COUNT;

/// One supervised pair derived from the policy table
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub state: State,
    /// Board of `state`, mover bit dropped
    pub input: Vec<f64>,
    /// Board after the optimal action; `None` for terminal states
    pub target: Option<Vec<f64>>,
}

impl TrainingSample {
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}

/// Every enumerated state as a training sample.
///
/// Terminal states stay in the set without a target; they are skipped when
/// updating weights. Epochs reorder the samples but never modify them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    samples: Vec<TrainingSample>,
}

impl TrainingSet {
    /// Solve the game from `start` and derive the training pairs.
    pub fn build(start: &State) -> Result<Self> {
        Self::from_policy(&build_policy_table(start)?)
    }

    pub fn from_policy(table: &PolicyTable) -> Result<Self> {
        let mut samples = Vec::with_capacity(table.len());
        for state in table.states() {
            let target = table
                .optimal_successor(state)?
                .map(|next| next.board_vector());
            samples.push(TrainingSample {
                state: *state,
                input: state.board_vector(),
                target,
            });
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// Number of samples that carry a target
    pub fn trainable(&self) -> usize {
        self.samples.iter().filter(|s| s.has_target()).count()
    }

    /// Uniform random reordering
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.samples.shuffle(rng);
    }
}

/// Build the training set for every state reachable from `start`.
pub fn build_training_set(start: &State) -> Result<TrainingSet> {
    TrainingSet::build(start)
}

/// Shuffle the set, then classify and update on every sample with a target.
///
/// Returns the number of gradient steps taken.
pub fn train_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    set: &mut TrainingSet,
    rng: &mut R,
) -> Result<usize> {
    set.shuffle(rng);

    let mut updates = 0;
    for sample in &set.samples {
        let Some(target) = &sample.target else {
            continue;
        };
        let trace = network.classify(&sample.input)?;
        network.update_weights(trace, target)?;
        updates += 1;
    }
    Ok(updates)
}

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of passes over the training set
    pub epochs: usize,

    /// Random seed for weight initialisation and shuffling
    pub seed: Option<u64>,

    /// Network shape and learning rate
    pub network: NetworkConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 200,
            seed: None,
            network: NetworkConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.network.validate()?;
        Ok(config)
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub epochs: usize,
    /// Samples in the set, terminal states included
    pub samples: usize,
    /// Samples with a target
    pub trainable_samples: usize,
    pub total_updates: usize,
}

/// Everything a training run produces
#[derive(Debug, Clone)]
pub struct TrainingRun {
    pub network: Network,
    pub policy: PolicyTable,
    pub training_set: TrainingSet,
    pub result: TrainingResult,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Training pipeline: solve, derive samples, fit the network epoch by epoch
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Solve from `start`, build a fresh network and train it.
    ///
    /// With a configured seed, the whole run (initial weights and every
    /// shuffle) is reproducible.
    pub fn run(&mut self, start: &State) -> Result<TrainingRun> {
        let policy = build_policy_table(start)?;
        let mut training_set = TrainingSet::from_policy(&policy)?;
        let mut rng = build_rng(self.config.seed);
        let mut network = Network::new(NUM_INPUTS, NUM_OUTPUTS, &self.config.network, &mut rng)?;

        let result = self.train(&mut network, &mut training_set, &mut rng)?;

        Ok(TrainingRun {
            network,
            policy,
            training_set,
            result,
        })
    }

    /// Run the configured number of epochs over `set`.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        network: &mut Network,
        set: &mut TrainingSet,
        rng: &mut R,
    ) -> Result<TrainingResult> {
        let epochs = self.config.epochs;

        for observer in &mut self.observers {
            observer.on_training_start(epochs, set.len())?;
        }

        let mut total_updates = 0;
        for epoch in 1..=epochs {
            let updates = train_epoch(network, set, rng)?;
            total_updates += updates;

            info!(epoch, epochs, updates, "epoch completed");

            let summary = EpochSummary {
                epoch,
                epochs,
                updates,
            };
            for observer in &mut self.observers {
                observer.on_epoch_end(&summary)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult {
            epochs,
            samples: set.len(),
            trainable_samples: set.trainable(),
            total_updates,
        })
    }
}
