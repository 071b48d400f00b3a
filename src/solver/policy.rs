//! Optimal policy table over the reachable state space

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::minimax::solve;
use crate::{
    Result,
    hexapawn::{Action, State, StateSpace, enumerate_states},
};

/// Solver output for a single state.
///
/// The (value at the state, value after the optimal move, optimal move)
/// triple is (`utility`, `next_utility`, `action`); `value` adds the
/// minimax value of the state under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyEntry {
    /// Minimax value under optimal play by both sides
    pub value: i8,
    /// Structural utility of the state itself
    pub utility: i8,
    /// Utility of the state reached by `action` (equals `utility` when terminal)
    pub next_utility: i8,
    /// Optimal action, `None` for terminal states
    pub action: Option<Action>,
}

impl PolicyEntry {
    pub fn is_terminal(&self) -> bool {
        self.action.is_none()
    }
}

/// Mapping from every state reachable from a start position to its
/// [`PolicyEntry`]. Built once; read-only afterwards.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    start: State,
    states: StateSpace,
    entries: HashMap<State, PolicyEntry>,
}

impl PolicyTable {
    /// Enumerate the reachable states from `start` and solve each of them.
    ///
    /// The start state is not part of the enumeration, so it is solved on
    /// its own: [`PolicyTable::get`] answers for it while the rows, training
    /// samples and scored states cover only the enumerated states.
    pub fn build(start: &State) -> Result<Self> {
        let states = enumerate_states(start)?;
        let mut entries = HashMap::with_capacity(states.len() + 1);

        for state in &states {
            entries.insert(*state, solve_entry(state)?);
        }
        let start_entry = solve_entry(start)?;
        entries.insert(*start, start_entry);

        debug!(
            states = states.len(),
            start_value = start_entry.value,
            "built policy table"
        );

        Ok(Self {
            start: *start,
            states,
            entries,
        })
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    /// The enumerated states, in discovery order
    pub fn states(&self) -> &StateSpace {
        &self.states
    }

    pub fn get(&self, state: &State) -> Option<&PolicyEntry> {
        self.entries.get(state)
    }

    /// Number of enumerated states; the start entry is not counted
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Entry for the start state
    pub fn start_entry(&self) -> Option<&PolicyEntry> {
        self.entries.get(&self.start)
    }

    /// Entries of the enumerated states, in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&State, &PolicyEntry)> {
        self.states
            .iter()
            .filter_map(|state| self.entries.get(state).map(|entry| (state, entry)))
    }

    /// State reached by playing the optimal action from `state`.
    ///
    /// Returns `Ok(None)` for terminal states and states outside the table.
    pub fn optimal_successor(&self, state: &State) -> Result<Option<State>> {
        match self.get(state).and_then(|entry| entry.action) {
            Some(action) => Ok(Some(state.apply_action(&action)?)),
            None => Ok(None),
        }
    }

    /// Line of optimal play from `from` until a terminal state, both ends
    /// included. States outside the table stop the line.
    pub fn principal_variation(&self, from: &State) -> Result<Vec<State>> {
        let mut line = vec![*from];
        let mut current = *from;
        while let Some(next) = self.optimal_successor(&current)? {
            line.push(next);
            current = next;
        }
        Ok(line)
    }
}

fn solve_entry(state: &State) -> Result<PolicyEntry> {
    let evaluation = solve(state)?;
    let utility = state.utility();
    let next_utility = match &evaluation.action {
        Some(action) => state.apply_action(action)?.utility(),
        None => utility,
    };
    Ok(PolicyEntry {
        value: evaluation.value,
        utility,
        next_utility,
        action: evaluation.action,
    })
}

/// Build the policy table for every state reachable from `start`.
pub fn build_policy_table(start: &State) -> Result<PolicyTable> {
    PolicyTable::build(start)
}
