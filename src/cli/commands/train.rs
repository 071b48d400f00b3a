//! Train command - Fit the policy network to the solver's optimal moves

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{format_outputs, print_kv, print_section, print_subsection},
    export::PolicyCsvExporter,
    nn::Activation,
    pipeline::{
        EvaluationReport, JsonlObserver, ProgressObserver, TrainingConfig, TrainingPipeline,
        evaluate,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Train the policy network")]
pub struct TrainArgs {
    /// Start state as 10 comma-separated values (mover, then 9 cells)
    #[arg(long)]
    pub state: Option<String>,

    /// JSON training configuration; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of training epochs
    #[arg(long, short = 'e')]
    pub epochs: Option<usize>,

    /// Number of hidden layers
    #[arg(long)]
    pub hidden_layers: Option<usize>,

    /// Neurons per hidden layer
    #[arg(long)]
    pub neurons: Option<usize>,

    /// Activation function (sigmoid or relu)
    #[arg(long)]
    pub activation: Option<Activation>,

    /// Gradient descent step size
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional file for JSONL epoch summaries
    #[arg(long)]
    pub metrics: Option<PathBuf>,

    /// Export per-state predictions to a CSV file
    #[arg(long)]
    pub predictions: Option<PathBuf>,

    /// Save the effective configuration as JSON
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Print only the aggregate report
    #[arg(long, default_value_t = false)]
    pub summary_only: bool,

    /// Log every epoch
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl TrainArgs {
    /// Configuration file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<TrainingConfig> {
        let mut config = match &self.config {
            Some(path) => TrainingConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => TrainingConfig::default(),
        };

        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(hidden_layers) = self.hidden_layers {
            config.network.hidden_layers = hidden_layers;
        }
        if let Some(neurons) = self.neurons {
            config.network.neurons_per_layer = neurons;
        }
        if let Some(activation) = self.activation {
            config.network.activation = activation;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.network.learning_rate = learning_rate;
        }

        config.network.validate()?;
        Ok(config)
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let start = parse_state(args.state.as_deref())?;
    let config = args.resolve_config()?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        println!("Configuration saved to: {}", path.display());
    }

    print_section("Hexapawn Policy Network");
    print_kv("Epochs", &config.epochs.to_string());
    print_kv("Hidden layers", &config.network.hidden_layers.to_string());
    print_kv("Neurons per layer", &config.network.neurons_per_layer.to_string());
    print_kv("Activation", config.network.activation.as_str());
    print_kv("Learning rate", &config.network.learning_rate.to_string());
    print_kv(
        "Seed",
        &config
            .seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "random".to_string()),
    );

    let mut pipeline = TrainingPipeline::new(config);
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.metrics {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let run = pipeline.run(&start)?;
    let report = evaluate(&run.network, &run.policy)?;

    print_subsection("Training");
    print_kv("Samples", &run.result.samples.to_string());
    print_kv("Trainable samples", &run.result.trainable_samples.to_string());
    print_kv("Gradient steps", &run.result.total_updates.to_string());

    if !args.summary_only {
        print_predictions(&report);
    }
    print_summary(&report);

    if let Some(path) = &args.predictions {
        let rows = PolicyCsvExporter::export_predictions(&report, path)?;
        println!("\nPredictions ({rows} states) exported to: {}", path.display());
    }
    if let Some(path) = &args.metrics {
        println!("Epoch metrics written to: {}", path.display());
    }

    Ok(())
}

fn print_predictions(report: &EvaluationReport) {
    print_subsection("Predictions");
    for prediction in &report.predictions {
        println!("  state:     {}", prediction.state.encode());
        println!("  predicted: {}", format_outputs(&prediction.predicted));
        println!("  optimal:   {}", format_outputs(&prediction.optimal.board_vector()));
        println!(
            "  {}\n",
            if prediction.correct { "correct" } else { "incorrect" }
        );
    }
}

fn print_summary(report: &EvaluationReport) {
    print_subsection("Evaluation");
    print_kv("Enumerated states", &report.total_states.to_string());
    print_kv("Scored states", &report.scored.to_string());
    print_kv(
        "Correct",
        &format!(
            "{}/{} ({:.1}%)",
            report.correct,
            report.scored,
            report.accuracy() * 100.0
        ),
    );
    print_kv("Mean squared error", &format!("{:.4}", report.mean_squared_error));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> TrainArgs {
        let mut argv = vec!["train"];
        argv.extend_from_slice(extra);
        TrainArgs::parse_from(argv)
    }

    #[test]
    fn flags_override_defaults() {
        let config = args(&[
            "--epochs",
            "5",
            "--activation",
            "relu",
            "--learning-rate",
            "0.05",
            "--seed",
            "3",
        ])
        .resolve_config()
        .unwrap();
        assert_eq!(config.epochs, 5);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.network.activation, Activation::Relu);
        assert_eq!(config.network.learning_rate, 0.05);
        assert_eq!(config.network.hidden_layers, 2);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "epochs": 50, "network": { "neurons_per_layer": 8 } }"#,
        )
        .unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let config = args(&["--config", &path_arg, "--epochs", "7"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.epochs, 7);
        assert_eq!(config.network.neurons_per_layer, 8);
    }

    #[test]
    fn rejects_invalid_learning_rate() {
        assert!(args(&["--learning-rate", "0"]).resolve_config().is_err());
    }
}
