//! Subcommand implementations

use anyhow::{Context, Result};

use crate::hexapawn::State;

pub mod play;
pub mod solve;
pub mod train;

/// Parse `--state`, falling back to the standard opening position.
pub(crate) fn parse_state(raw: Option<&str>) -> Result<State> {
    match raw {
        Some(text) => text
            .parse::<State>()
            .with_context(|| format!("Invalid --state '{text}'")),
        None => Ok(State::new()),
    }
}
