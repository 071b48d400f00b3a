//! Compare network predictions with the solver's optimal moves

use serde::Serialize;

use crate::{
    Result,
    hexapawn::State,
    nn::{Network, squared_error},
    solver::PolicyTable,
};

/// Network output against the optimal successor for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub state: State,
    /// Raw network output
    pub predicted: Vec<f64>,
    /// State reached by the solver's optimal action
    pub optimal: State,
    /// Every rounded output matches the optimal board
    pub correct: bool,
}

impl Prediction {
    /// Predicted board with every output snapped to a cell value
    pub fn rounded(&self) -> Vec<f64> {
        self.predicted.iter().copied().map(round_to_cell).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// One row per non-terminal state, in discovery order
    pub predictions: Vec<Prediction>,
    pub correct: usize,
    /// States with an optimal action
    pub scored: usize,
    /// All enumerated states, terminal ones included
    pub total_states: usize,
    /// Mean over scored states of the summed squared output error
    pub mean_squared_error: f64,
}

impl EvaluationReport {
    pub fn accuracy(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.correct as f64 / self.scored as f64
        }
    }
}

/// Nearest of -1, 0 and 1
pub fn round_to_cell(value: f64) -> f64 {
    value.round().clamp(-1.0, 1.0)
}

/// Classify every non-terminal state in `policy` and score the rounded
/// output against the board after the optimal action.
pub fn evaluate(network: &Network, policy: &PolicyTable) -> Result<EvaluationReport> {
    let mut predictions = Vec::new();
    let mut correct = 0;
    let mut error_sum = 0.0;

    for state in policy.states() {
        let Some(optimal) = policy.optimal_successor(state)? else {
            continue;
        };
        let output = network.predict(&state.board_vector())?;
        let target = optimal.board_vector();

        let hit = output
            .iter()
            .zip(&target)
            .all(|(y, t)| round_to_cell(*y) == *t);
        if hit {
            correct += 1;
        }
        error_sum += squared_error(&output, &target);

        predictions.push(Prediction {
            state: *state,
            predicted: output.to_vec(),
            optimal,
            correct: hit,
        });
    }

    let scored = predictions.len();
    let mean_squared_error = if scored == 0 {
        0.0
    } else {
        error_sum / scored as f64
    };

    Ok(EvaluationReport {
        predictions,
        correct,
        scored,
        total_states: policy.len(),
        mean_squared_error,
    })
}
