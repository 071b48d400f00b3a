//! Reachable state enumeration and summary statistics

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::board::State;

/// Every state reachable from a start position, in depth-first discovery
/// order. Membership is by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSpace {
    order: Vec<State>,
    seen: HashSet<State>,
}

impl StateSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state; returns `false` if it was already present.
    pub fn insert(&mut self, state: State) -> bool {
        if !self.seen.insert(state) {
            return false;
        }
        self.order.push(state);
        true
    }

    pub fn contains(&self, state: &State) -> bool {
        self.seen.contains(state)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.order.iter()
    }

    pub fn terminal_states(&self) -> impl Iterator<Item = &State> {
        self.order.iter().filter(|state| state.is_terminal())
    }
}

impl<'a> IntoIterator for &'a StateSpace {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Enumerate every state reachable from `start` by legal play.
///
/// The traversal is depth-first and follows every legal action, so the
/// result covers positions that only arise under sub-optimal play. Only
/// states reached by an action are recorded, so the start state itself is
/// never part of the result (pawns only move forward, so it cannot recur).
/// Terminal states are recorded but not expanded.
///
/// # Errors
///
/// Propagates [`crate::Error::InvalidAction`] from the rules engine, which
/// only happens if move generation and move application disagree.
pub fn enumerate_states(start: &State) -> crate::Result<StateSpace> {
    let mut space = StateSpace::new();
    visit(start, &mut space)?;

    debug!(
        start = %start.encode(),
        states = space.len(),
        "enumerated reachable states"
    );
    Ok(space)
}

fn visit(state: &State, space: &mut StateSpace) -> crate::Result<()> {
    if state.is_terminal() {
        return Ok(());
    }
    for action in state.legal_actions() {
        let next = state.apply_action(&action)?;
        if space.insert(next) {
            visit(&next, space)?;
        }
    }
    Ok(())
}

/// Counts over an enumerated state space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSpaceStats {
    pub total_states: usize,
    pub terminal_states: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    /// Terminal states where the mover is blocked and nobody reached a goal row
    pub stalemates: usize,
    pub by_piece_count: BTreeMap<usize, usize>,
}

pub fn analyze_state_space(space: &StateSpace) -> StateSpaceStats {
    let mut stats = StateSpaceStats {
        total_states: space.len(),
        ..StateSpaceStats::default()
    };

    for state in space {
        *stats.by_piece_count.entry(state.piece_count()).or_insert(0) += 1;

        if !state.is_terminal() {
            continue;
        }
        stats.terminal_states += 1;
        match state.utility() {
            1 => stats.white_wins += 1,
            -1 => stats.black_wins += 1,
            _ => stats.stalemates += 1,
        }
    }

    stats
}
