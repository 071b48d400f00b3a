//! Exact game-tree solver
//!
//! Full-depth minimax over the reachable state space. The board is fixed at
//! 3×3, so the search runs without pruning or memoisation.

pub mod minimax;
pub mod policy;

pub use minimax::{Evaluation, evaluate, minimax, solve};
pub use policy::{PolicyEntry, PolicyTable, build_policy_table};
