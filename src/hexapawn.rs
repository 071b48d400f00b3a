//! Hexapawn rules on the fixed 3×3 board

pub mod action;
pub mod board;
pub mod game_tree;

pub use action::{Action, ActionKind};
pub use board::{BOARD_SIZE, CELL_COUNT, Cell, Player, STATE_LEN, State};
pub use game_tree::{StateSpace, StateSpaceStats, analyze_state_space, enumerate_states};
