//! CLI infrastructure for the Hexapawn toolkit
//!
//! This module provides the command-line interface for solving the game,
//! training the policy network and replaying optimal lines.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, prelude::*};

pub mod commands;
pub mod output;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `info` for this
/// crate and warnings everywhere else.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "warn,hexapawn=info" } else { "warn" };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default)?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("Failed to set up tracing subscriber: {e}"))
}
