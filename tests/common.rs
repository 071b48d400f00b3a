//! Common test utilities for the hexapawn test suite.

#![allow(dead_code)]

use hexapawn::hexapawn::{CELL_COUNT, State};
use rand::{Rng, rngs::StdRng};

/// Build a state from its 10-value encoding (mover first).
pub fn state(values: [i64; 10]) -> State {
    State::from_values(&values).expect("test state should be valid")
}

/// The standard opening position.
pub fn start() -> State {
    State::new()
}

/// Uniform input vector in [-1, 1].
pub fn random_input(rng: &mut StdRng, width: usize) -> Vec<f64> {
    (0..width).map(|_| rng.random_range(-1.0..=1.0)).collect()
}

/// Random board-shaped target with cells drawn from {-1, 0, 1}.
pub fn random_board_target(rng: &mut StdRng) -> Vec<f64> {
    (0..CELL_COUNT)
        .map(|_| f64::from(rng.random_range(-1i8..=1)))
        .collect()
}
